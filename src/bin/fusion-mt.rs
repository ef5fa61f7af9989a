use clap::{Arg, Command};
use fusion_mt::{
    AzureTranslatorProvider, MockBehavior, MockProvider, TranslationProvider, Translator,
    language_name, resolve_code,
};
use std::sync::Arc;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("warn".parse().unwrap()),
        )
        .init();

    let matches = Command::new("fusion-mt")
        .version("0.1.0")
        .about("Translation CLI for the Final Fusion translator core")
        .arg(
            Arg::new("text")
                .help("Text to translate")
                .required(true)
                .index(1),
        )
        .arg(
            Arg::new("target")
                .help("Target language, as code or name (e.g. es, Spanish)")
                .required(true)
                .index(2),
        )
        .arg(
            Arg::new("source")
                .long("source")
                .short('s')
                .help("Source language (default: auto-detect)")
                .default_value("auto"),
        )
        .arg(
            Arg::new("offline")
                .long("offline")
                .short('o')
                .help("Skip the online provider and use the offline pipeline")
                .action(clap::ArgAction::SetTrue),
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .short('v')
                .help("Show request and result details")
                .action(clap::ArgAction::SetTrue),
        )
        .get_matches();

    let text = matches.get_one::<String>("text").unwrap();
    let target_arg = matches.get_one::<String>("target").unwrap();
    let source_arg = matches.get_one::<String>("source").unwrap();
    let offline = matches.get_flag("offline");
    let verbose = matches.get_flag("verbose");

    let target = resolve_code(target_arg)
        .ok_or_else(|| format!("Unknown target language: {}", target_arg))?;
    let source = resolve_code(source_arg)
        .ok_or_else(|| format!("Unknown source language: {}", source_arg))?;

    // Without credentials the dispatcher still works: an always-failing
    // provider routes every request through the offline pipeline
    let provider: Arc<dyn TranslationProvider> = if offline {
        Arc::new(MockProvider::new(MockBehavior::Flagged))
    } else {
        match AzureTranslatorProvider::from_env() {
            Ok(provider) => Arc::new(provider),
            Err(err) => {
                eprintln!("⚠️  {} — continuing offline", err);
                Arc::new(MockProvider::new(MockBehavior::Flagged))
            }
        }
    };

    if verbose {
        println!("📝 Text: \"{}\"", text);
        println!("🌍 {} → {}", source, target);
        println!("🔌 Provider: {}", provider.name());
        println!();
    }

    let translator = Translator::new(provider);
    let result = translator.translate(text, source, target).await;

    if verbose {
        println!(
            "🔎 Source: {} ({})",
            result.source,
            language_name(&result.source).unwrap_or("unknown")
        );
        if result.is_mock {
            println!("🧪 Offline pseudo-translation — no provider result");
        }
        if result.error {
            println!("❌ Provider signalled an error");
        }
        println!();
    }

    println!("{}", result.text);

    Ok(())
}
