use anyhow::Result;
use brief_citation::{AiSelectionMode, SearchContext};
use brief_content::SectionKey;
use brief_core::demo::demo_session;
use brief_core::{BriefSession, EngineConfig};
use clap::{value_parser, Arg, ArgAction, ArgMatches, Command};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let cli = Command::new("briefcraft")
        .version(brief_core::VERSION)
        .about("Campaign brief revision & citation selection demo")
        .arg_required_else_help(false)
        .arg(
            Arg::new("fast")
                .long("fast")
                .global(true)
                .action(ArgAction::SetTrue)
                .help("Run with zero simulated latency and a fixed seed"),
        )
        .subcommand(
            Command::new("revise")
                .about("Run the regenerate/accept/undo flow for one section")
                .arg(
                    Arg::new("section")
                        .long("section")
                        .default_value("objectives")
                        .help("Section key, optionally channel-qualified (base.channel)"),
                )
                .arg(
                    Arg::new("prompt")
                        .long("prompt")
                        .default_value("make it sharper")
                        .help("Regeneration prompt"),
                )
                .arg(
                    Arg::new("seed")
                        .long("seed")
                        .value_parser(value_parser!(u64))
                        .help("Generator seed for reproducible output"),
                ),
        )
        .subcommand(
            Command::new("citations")
                .about("Run the AI citation search in merge then replace mode")
                .arg(
                    Arg::new("topic")
                        .long("topic")
                        .default_value("immunotherapy")
                        .help("Search topic routed to a candidate group"),
                ),
        );

    let matches = cli.get_matches();
    let config = build_config(&matches);

    match matches.subcommand() {
        Some(("revise", sub)) => {
            let session = demo_session(apply_seed(config, sub));
            let key: SectionKey = sub
                .get_one::<String>("section")
                .expect("has default")
                .parse()?;
            let prompt = sub.get_one::<String>("prompt").expect("has default");
            run_revision_flow(&session, &key, prompt).await?;
        }
        Some(("citations", sub)) => {
            let session = demo_session(config);
            let topic = sub.get_one::<String>("topic").expect("has default");
            run_citation_flow(&session, topic).await;
        }
        _ => {
            // No subcommand: run the whole scripted demo
            let session = demo_session(config);
            run_revision_flow(&session, &SectionKey::bare("objectives"), "make it sharper")
                .await?;
            run_citation_flow(&session, "immunotherapy").await;
        }
    }

    Ok(())
}

fn build_config(matches: &ArgMatches) -> EngineConfig {
    if matches.get_flag("fast") {
        EngineConfig::fast()
    } else {
        EngineConfig::new()
    }
}

fn apply_seed(config: EngineConfig, sub: &ArgMatches) -> EngineConfig {
    match sub.get_one::<u64>("seed") {
        Some(seed) => config.with_generator_seed(*seed),
        None => config,
    }
}

async fn run_revision_flow(session: &BriefSession, key: &SectionKey, prompt: &str) -> Result<()> {
    let before = session.content(key);
    println!("section {key}");
    println!("  before: {}", render(&before));

    session.regenerate_section(key, prompt).await?;
    println!("  staged: {}", render(&session.staged_content(key)));

    session.accept_regeneration(key)?;
    println!("  accepted: {}", render(&session.content(key)));

    session.undo_confirmed_regeneration(key)?;
    println!("  undone: {}", render(&session.content(key)));
    Ok(())
}

async fn run_citation_flow(session: &BriefSession, topic: &str) {
    let context = SearchContext::for_topic(topic);

    session.set_citation_mode(AiSelectionMode::Merge);
    let merged = session.search_citations(&context).await;
    println!(
        "merge search for '{topic}': {} -> {} selected",
        merged.previous_count, merged.final_count
    );

    session.set_citation_mode(AiSelectionMode::Replace);
    let replaced = session.search_citations(&context).await;
    println!(
        "replace search for '{topic}': {} -> {} selected",
        replaced.previous_count, replaced.final_count
    );
    for citation in session.selected_citations() {
        println!("  [{}] {} ({})", citation.id, citation.title, citation.year);
    }
}

fn render(content: &Option<brief_content::SectionContent>) -> String {
    match content {
        Some(brief_content::SectionContent::Text(text)) => text.clone(),
        Some(brief_content::SectionContent::KeyMessages(messages)) => messages
            .iter()
            .map(|m| format!("{}: {}", m.tag, m.description))
            .collect::<Vec<_>>()
            .join(" | "),
        None => "<empty>".to_string(),
    }
}
