use anyhow::Context;
use log::info;
use symptom_dx::{ConsolePresenter, DiagnosisConfig, KnowledgeBase, Session};

fn main() -> anyhow::Result<()> {
    // Setup logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = DiagnosisConfig::default();
    info!(
        "Loading disease data from {}, {} and {}",
        config.paths.symptoms.display(),
        config.paths.descriptions.display(),
        config.paths.precautions.display()
    );
    let knowledge_base = KnowledgeBase::load(&config);

    let mut presenter = ConsolePresenter::new();
    Session::new(&knowledge_base)
        .run(&mut presenter)
        .context("Medical diagnosis session failed")?;

    info!("Session finished");
    Ok(())
}
