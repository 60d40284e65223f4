// ABOUTME: CLI for the documentation-site navigation helpers.
// ABOUTME: Resolves version menus, manages tab state, and queries GitHub stats, printing JSON or HTML.

use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{anyhow, bail, Context, Result};
use clap::{Parser, Subcommand};
use docsnav_channels::{
    render_menu_html, resolve, ChannelCatalog, CurrentContext, GroupOrder, MenuOptions,
};
use docsnav_site::{
    record_shown, restore, tab_containers, GithubClient, JsonFileStore, PageContext,
    TabContainer, DEFAULT_API_BASE,
};
use serde_json::{json, Value};
use tracing::debug;

#[derive(Parser, Debug)]
#[command(name = "docsnav")]
#[command(about = "Resolve documentation version menus and site widgets", long_about = None)]
struct Cli {
    /// Output compact JSON instead of pretty.
    #[arg(long, global = true, default_value_t = false)]
    compact: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Resolve the current channel and the alternate-version menu for a page
    Menu {
        /// channels.js or JSON catalog. Use "-" for stdin. Omit for local mode.
        #[arg(long)]
        catalog: Option<String>,

        /// Rendered page to read the release/channel markers from
        #[arg(long)]
        html: Option<PathBuf>,

        /// Current release (overrides the page marker)
        #[arg(long)]
        release: Option<String>,

        /// Current channel (overrides the page marker); "root" infers it from the release
        #[arg(long)]
        channel: Option<String>,

        /// Page location, as a URL or a path
        #[arg(long, default_value = "/")]
        location: String,

        /// Group order: "catalog" or "numeric-descending"
        #[arg(long, default_value_t = GroupOrder::Catalog.to_string())]
        group_order: String,

        /// Shorthand for --group-order numeric-descending
        #[arg(long)]
        sorted: bool,

        /// Print the header markup instead of JSON
        #[arg(long)]
        render: bool,
    },

    /// Persist and restore the active tab of tab containers
    Tabs {
        #[command(subcommand)]
        command: TabsCommands,
    },

    /// Print the star count of a GitHub repository
    Stars {
        /// Repository as owner/name
        #[arg(long)]
        repo: String,

        #[arg(long, default_value = DEFAULT_API_BASE)]
        api_base: String,

        #[arg(long, env = "GITHUB_TOKEN", hide_env_values = true)]
        token: Option<String>,
    },

    /// Print which roadmap steps (issue numbers) are closed
    Roadmap {
        /// Repository as owner/name
        #[arg(long)]
        repo: String,

        /// Issue number of a roadmap step (repeatable)
        #[arg(long = "step", required = true)]
        steps: Vec<u64>,

        #[arg(long, default_value = DEFAULT_API_BASE)]
        api_base: String,

        #[arg(long, env = "GITHUB_TOKEN", hide_env_values = true)]
        token: Option<String>,
    },
}

#[derive(Subcommand, Debug)]
enum TabsCommands {
    /// Record the tab shown in a container
    Record {
        /// JSON file backing the store
        #[arg(long)]
        store: PathBuf,
        #[arg(long)]
        container: String,
        #[arg(long)]
        href: String,
    },

    /// Print the tabs to activate
    Restore {
        /// JSON file backing the store
        #[arg(long)]
        store: PathBuf,

        /// Page to discover tab containers in
        #[arg(long)]
        html: Option<PathBuf>,

        /// Container as ID=HREF1,HREF2 (repeatable)
        #[arg(long = "container")]
        containers: Vec<String>,
    },
}

#[tokio::main]
async fn main() -> ExitCode {
    let log_filter = std::env::var("RUST_LOG").unwrap_or_else(|_| "warn".to_string());
    tracing_subscriber::fmt()
        .with_env_filter(log_filter)
        .with_writer(io::stderr)
        .init();

    match run(Cli::parse()).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {:#}", err);
            ExitCode::from(1)
        }
    }
}

async fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Menu {
            catalog,
            html,
            release,
            channel,
            location,
            group_order,
            sorted,
            render,
        } => {
            let catalog = catalog.as_deref().map(load_catalog).transpose()?;
            let (page_release, page_channel, path) = match &html {
                Some(html_path) => {
                    let page_html = read_text(html_path)?;
                    let page = PageContext::from_html(&page_html, &location);
                    (
                        Some(page.context.release),
                        Some(page.context.channel),
                        page.path,
                    )
                }
                None => (None, None, docsnav_site::location_path(&location)),
            };
            let context = CurrentContext::from_optional(
                release.or(page_release),
                channel.or(page_channel),
            );

            let order = if sorted {
                GroupOrder::NumericDescending
            } else {
                GroupOrder::from(group_order.as_str())
            };
            let opts = MenuOptions::builder().group_order(order).build();

            let menu = resolve(catalog.as_ref(), &context, &path, &opts);
            if render {
                // Local mode renders nothing, like the page does.
                if let Some(menu) = &menu {
                    println!("{}", render_menu_html(menu));
                }
                return Ok(());
            }

            let output = match menu {
                Some(menu) => {
                    let mut value = serde_json::to_value(&menu).context("serialize menu")?;
                    if let Value::Object(map) = &mut value {
                        map.insert("mode".into(), json!("release"));
                        map.insert("has_alternates".into(), json!(menu.has_alternates()));
                    }
                    value
                }
                None => json!({ "mode": "local", "current_channel": context.channel }),
            };
            print_json(&output, cli.compact)?;
        }

        Commands::Tabs { command } => match command {
            TabsCommands::Record {
                store,
                container,
                href,
            } => {
                let mut store = JsonFileStore::new(store);
                record_shown(&mut store, &container, &href)
                    .with_context(|| format!("record tab in {}", store.path().display()))?;
            }
            TabsCommands::Restore {
                store,
                html,
                containers,
            } => {
                let mut all = match &html {
                    Some(path) => tab_containers(&read_text(path)?),
                    None => Vec::new(),
                };
                for spec in &containers {
                    all.push(parse_container(spec)?);
                }
                if all.is_empty() {
                    bail!("no tab containers given (use --html or --container)");
                }

                let store = JsonFileStore::new(store);
                let activations = restore(&store, &all)
                    .with_context(|| format!("restore tabs from {}", store.path().display()))?;
                print_json(&serde_json::to_value(&activations)?, cli.compact)?;
            }
        },

        Commands::Stars {
            repo,
            api_base,
            token,
        } => {
            let client = github_client(api_base, token)?;
            let stars = client
                .stargazers(&repo)
                .await
                .with_context(|| format!("fetch stars of {}", repo))?;
            print_json(&json!({ "repo": repo, "stargazers_count": stars }), cli.compact)?;
        }

        Commands::Roadmap {
            repo,
            steps,
            api_base,
            token,
        } => {
            let client = github_client(api_base, token)?;
            let states = client.roadmap(&repo, &steps).await;
            print_json(&json!({ "repo": repo, "steps": states }), cli.compact)?;
        }
    }

    Ok(())
}

fn github_client(api_base: String, token: Option<String>) -> Result<GithubClient> {
    let mut builder = GithubClient::builder().api_base(api_base);
    if let Some(token) = token.filter(|t| !t.is_empty()) {
        builder = builder.token(token);
    }
    builder.build().context("build GitHub client")
}

fn load_catalog(target: &str) -> Result<ChannelCatalog> {
    let data = if target == "-" {
        let mut buf = String::new();
        io::stdin()
            .read_to_string(&mut buf)
            .context("read catalog from stdin")?;
        buf
    } else {
        read_text(Path::new(target))?
    };
    debug!(catalog = target, bytes = data.len(), "loaded catalog");
    ChannelCatalog::from_script(&data).with_context(|| format!("load catalog {}", target))
}

fn read_text(path: &Path) -> Result<String> {
    if !path.exists() {
        return Err(anyhow!("file not found: {}", path.display()));
    }
    fs::read_to_string(path).with_context(|| format!("read {}", path.display()))
}

/// Parses `ID=HREF1,HREF2`.
fn parse_container(spec: &str) -> Result<TabContainer> {
    let (id, tabs) = spec
        .split_once('=')
        .with_context(|| format!("invalid container {:?}, expected ID=HREF1,HREF2", spec))?;
    if id.is_empty() {
        bail!("invalid container {:?}: empty id", spec);
    }
    let tabs = tabs
        .split(',')
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(str::to_string)
        .collect();
    Ok(TabContainer::new(id, tabs))
}

fn print_json(value: &Value, compact: bool) -> Result<()> {
    if compact {
        println!("{}", serde_json::to_string(value)?);
    } else {
        println!("{}", serde_json::to_string_pretty(value)?);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_container_spec() {
        let c = parse_container("os=#linux, #macos,").unwrap();
        assert_eq!(c, TabContainer::new("os", vec!["#linux".into(), "#macos".into()]));
        assert!(parse_container("nohrefs").is_err());
        assert!(parse_container("=#a").is_err());
    }
}
