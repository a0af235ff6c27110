use clap::ArgMatches;
use colored::Colorize;
use commands::command_argument_builder;
use std::process;
use torgrab::handlers::{fetch_page, render_links, resolve_output_path, save_output, LinkFormat};
use torgrab_fetcher::capture::capture_screenshot;
use torgrab_fetcher::extract::{extract_links, parse_document};
use torgrab_fetcher::{FetchedPage, ProxyEndpoint};
use url::Url;

mod commands;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt::init();

    let cmd = command_argument_builder();
    let chosen_command = cmd.get_matches();

    match chosen_command.subcommand() {
        Some(("html", sub_matches)) => handle_html(sub_matches).await,
        Some(("links", sub_matches)) => handle_links(sub_matches).await,
        Some(("screenshot", sub_matches)) => handle_screenshot(sub_matches).await,
        _ => unreachable!("clap should ensure we don't get here"),
    }
}

// Handler functions

async fn handle_html(sub_matches: &ArgMatches) {
    let output = resolve_output_path(sub_matches.get_one::<String>("output").unwrap());
    let page = fetch_or_exit(sub_matches).await;

    if let Err(e) = save_output(page.body.as_bytes(), &output) {
        eprintln!(
            "{} Failed to write {}: {}",
            "✗".red().bold(),
            output.display(),
            e
        );
        process::exit(1);
    }

    println!(
        "{} Saved {} bytes of HTML to {}",
        "✓".green().bold(),
        page.body.len(),
        output.display()
    );
}

async fn handle_links(sub_matches: &ArgMatches) {
    let output = resolve_output_path(sub_matches.get_one::<String>("output").unwrap());
    let format = LinkFormat::from_str(sub_matches.get_one::<String>("format").unwrap())
        .expect("clap restricts format values");

    let page = fetch_or_exit(sub_matches).await;
    let document = parse_document(&page.body);
    let links = extract_links(&document);

    let rendered = match render_links(&links, &format) {
        Ok(rendered) => rendered,
        Err(e) => {
            eprintln!("{} Failed to render links: {}", "✗".red().bold(), e);
            process::exit(1);
        }
    };

    if let Err(e) = save_output(rendered.as_bytes(), &output) {
        eprintln!(
            "{} Failed to write {}: {}",
            "✗".red().bold(),
            output.display(),
            e
        );
        process::exit(1);
    }

    println!(
        "{} Saved {} links to {}",
        "✓".green().bold(),
        links.len(),
        output.display()
    );
}

async fn handle_screenshot(sub_matches: &ArgMatches) {
    let url = sub_matches.get_one::<Url>("url").unwrap();
    let proxy = sub_matches.get_one::<ProxyEndpoint>("proxy").unwrap();
    let webdriver_url = sub_matches.get_one::<String>("webdriver").unwrap();
    let output = resolve_output_path(sub_matches.get_one::<String>("output").unwrap());

    let png = match capture_screenshot(url.as_str(), proxy, webdriver_url).await {
        Ok(png) => png,
        Err(e) => {
            eprintln!("{} Screenshot failed: {}", "✗".red().bold(), e);
            process::exit(1);
        }
    };

    if let Err(e) = save_output(&png, &output) {
        eprintln!(
            "{} Failed to write {}: {}",
            "✗".red().bold(),
            output.display(),
            e
        );
        process::exit(1);
    }

    println!(
        "{} Saved screenshot ({} bytes) to {}",
        "✓".green().bold(),
        png.len(),
        output.display()
    );
}

/// Fetch the page for the html/links subcommands, or report and exit.
async fn fetch_or_exit(sub_matches: &ArgMatches) -> FetchedPage {
    let url = sub_matches.get_one::<Url>("url").unwrap();
    let proxy = sub_matches.get_one::<ProxyEndpoint>("proxy").unwrap().clone();
    let timeout_secs = sub_matches.get_one::<u64>("timeout").copied();

    match fetch_page(url.as_str(), proxy, timeout_secs).await {
        Ok(page) => {
            println!(
                "{} Fetched {} (status {})",
                "✓".green().bold(),
                page.url,
                page.status_code
            );
            page
        }
        Err(e) => {
            eprintln!("{} Fetch failed: {}", "✗".red().bold(), e);
            process::exit(1);
        }
    }
}

pub const CLAP_STYLING: clap::builder::styling::Styles = clap::builder::styling::Styles::styled()
    .header(clap_cargo::style::HEADER)
    .usage(clap_cargo::style::USAGE)
    .literal(clap_cargo::style::LITERAL)
    .placeholder(clap_cargo::style::PLACEHOLDER)
    .error(clap_cargo::style::ERROR)
    .valid(clap_cargo::style::VALID)
    .invalid(clap_cargo::style::INVALID);
