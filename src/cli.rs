use std::path::PathBuf;

use clap::{App, Arg, ArgMatches};

static NAME: &str = "imgur-dl";
static VERSION: &str = "1.0";
static AUTHOR: &str = "apmaros";
static DESCRIPTION: &str = "Downloads every image of a public imgur album";
pub(crate) const URL: &str = "url";
const URL_SHORT: &str = "u";
pub(crate) const DESTINATION: &str = "destination";
const DESTINATION_SHORT: &str = "d";
pub(crate) const NAME_FLAG: &str = "name";
const NAME_FLAG_SHORT: &str = "n";
const VERSION_SHORT: &str = "v";

pub(crate) fn build_cli<'a, 'b>() -> App<'a, 'b> {
    App::new(NAME)
        .version(VERSION)
        .version_short(VERSION_SHORT)
        .author(AUTHOR)
        .about(DESCRIPTION)
        .arg(Arg::with_name(URL)
            .short(URL_SHORT)
            .long(URL)
            .takes_value(true)
            .help("The album's url you want to download.")
            .required(true))
        .arg(Arg::with_name(DESTINATION)
            .short(DESTINATION_SHORT)
            .long(DESTINATION)
            .takes_value(true)
            .help("Folder to store the downloaded images in. Defaults to a new folder in the \
                   current directory named after the album's id."))
        .arg(Arg::with_name(NAME_FLAG)
            .short(NAME_FLAG_SHORT)
            .long(NAME_FLAG)
            .takes_value(false)
            .help("Name the output folder after the album instead of its id \
                   (-d/--destination overrides this)."))
}

pub(crate) struct DownloadCmd {
    pub(crate) url: String,
    pub(crate) destination: Option<PathBuf>,
    pub(crate) use_name: bool,
}

impl DownloadCmd {
    pub(crate) fn build(matches: &ArgMatches) -> Self {
        // safe to unwrap, url is required
        let url = matches.value_of(URL).unwrap().to_owned();
        let destination = matches.value_of(DESTINATION).map(PathBuf::from);
        let use_name = matches.is_present(NAME_FLAG);

        DownloadCmd { url, destination, use_name }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Result<DownloadCmd, clap::Error> {
        build_cli()
            .get_matches_from_safe(args)
            .map(|m| DownloadCmd::build(&m))
    }

    #[test]
    fn test_url_only() {
        let cmd = parse(&["imgur-dl", "--url", "https://imgur.com/a/Y8D4O"]).unwrap();
        assert_eq!(cmd.url, "https://imgur.com/a/Y8D4O");
        assert_eq!(cmd.destination, None);
        assert!(!cmd.use_name);
    }

    #[test]
    fn test_short_flags() {
        let cmd = parse(&["imgur-dl", "-u", "https://imgur.com/a/x", "-d", "out", "-n"]).unwrap();
        assert_eq!(cmd.destination, Some(PathBuf::from("out")));
        assert!(cmd.use_name);
    }

    #[test]
    fn test_url_is_required() {
        let err = parse(&["imgur-dl", "--name"]).err().unwrap();
        assert_eq!(err.kind, clap::ErrorKind::MissingRequiredArgument);
    }

    #[test]
    fn test_version_flag() {
        let err = parse(&["imgur-dl", "-v"]).err().unwrap();
        assert_eq!(err.kind, clap::ErrorKind::VersionDisplayed);
    }

    #[test]
    fn test_unknown_flag_rejected() {
        assert!(parse(&["imgur-dl", "-u", "x", "--verbose"]).is_err());
    }
}
