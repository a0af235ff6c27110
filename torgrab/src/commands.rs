use crate::CLAP_STYLING;
use clap::{arg, command};
use torgrab_fetcher::capture::DEFAULT_WEBDRIVER_URL;
use torgrab_fetcher::ProxyEndpoint;
use url::Url;

const DEFAULT_PROXY: &str = "127.0.0.1:9150";

pub(crate) fn command_argument_builder() -> clap::Command {
    clap::Command::new("torgrab")
        .version(env!("CARGO_PKG_VERSION"))
        .bin_name("torgrab")
        .styles(CLAP_STYLING)
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(
            command!("html")
                .about("Fetch a page through the SOCKS5 proxy and save its raw HTML")
                .arg(
                    arg!(-u --"url" <URL>)
                        .required(true)
                        .help("The URL to fetch")
                        .value_parser(clap::value_parser!(Url)),
                )
                .arg(
                    arg!(-o --"output" <PATH>)
                        .required(false)
                        .help("File to write the HTML to")
                        .default_value("html.txt"),
                )
                .arg(
                    arg!(-p --"proxy" <ADDRESS>)
                        .required(false)
                        .help("SOCKS5 proxy to tunnel through (host:port)")
                        .value_parser(clap::value_parser!(ProxyEndpoint))
                        .default_value(DEFAULT_PROXY),
                )
                .arg(
                    arg!(--"timeout" <SECONDS>)
                        .required(false)
                        .help("Request timeout in seconds (default: no timeout)")
                        .value_parser(clap::value_parser!(u64)),
                ),
        )
        .subcommand(
            command!("links")
                .about("Fetch a page through the SOCKS5 proxy and save every link found in it")
                .arg(
                    arg!(-u --"url" <URL>)
                        .required(true)
                        .help("The URL to fetch")
                        .value_parser(clap::value_parser!(Url)),
                )
                .arg(
                    arg!(-o --"output" <PATH>)
                        .required(false)
                        .help("File to write the links to")
                        .default_value("links.txt"),
                )
                .arg(
                    arg!(-f --"format" <FORMAT>)
                        .required(false)
                        .help("Output format: text (one link per line) or json")
                        .value_parser(["text", "json"])
                        .default_value("text"),
                )
                .arg(
                    arg!(-p --"proxy" <ADDRESS>)
                        .required(false)
                        .help("SOCKS5 proxy to tunnel through (host:port)")
                        .value_parser(clap::value_parser!(ProxyEndpoint))
                        .default_value(DEFAULT_PROXY),
                )
                .arg(
                    arg!(--"timeout" <SECONDS>)
                        .required(false)
                        .help("Request timeout in seconds (default: no timeout)")
                        .value_parser(clap::value_parser!(u64)),
                ),
        )
        .subcommand(
            command!("screenshot")
                .about("Render a page in a proxied headless browser and save a screenshot")
                .arg(
                    arg!(-u --"url" <URL>)
                        .required(true)
                        .help("The URL to render")
                        .value_parser(clap::value_parser!(Url)),
                )
                .arg(
                    arg!(-o --"output" <PATH>)
                        .required(false)
                        .help("File to write the PNG to")
                        .default_value("screenshot.png"),
                )
                .arg(
                    arg!(-p --"proxy" <ADDRESS>)
                        .required(false)
                        .help("SOCKS5 proxy the browser routes through (host:port)")
                        .value_parser(clap::value_parser!(ProxyEndpoint))
                        .default_value(DEFAULT_PROXY),
                )
                .arg(
                    arg!(-w --"webdriver" <URL>)
                        .required(false)
                        .help("Address of the WebDriver server driving the browser")
                        .default_value(DEFAULT_WEBDRIVER_URL),
                ),
        )
}
