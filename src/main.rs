//! Resume screener: rank resumes against a job description by skill overlap

use clap::Parser;
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use log::{error, info};
use resume_screener::cli::{self, Cli, Commands, ConfigAction, ModelAction};
use resume_screener::config::{Config, TokenizerBackend};
use resume_screener::error::{Result, ResumeScreenerError};
use resume_screener::input::{extract_text, RawDocument};
use resume_screener::output::{save_report_to_file, ReportGenerator, ReportMetadata, ScreeningReport};
use resume_screener::pipeline::model_manager::ModelManager;
use resume_screener::pipeline::LinguisticPipeline;
use resume_screener::processing::{candidate_name, read_uploads, Screener, SkillMatcher};
use std::path::Path;
use std::process;
use std::sync::Arc;
use std::time::{Duration, Instant};

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    let config_path = cli.config.clone().unwrap_or_else(Config::config_path);
    let config = match Config::load_from(&config_path) {
        Ok(config) => config,
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            process::exit(1);
        }
    };

    if let Err(e) = run_command(cli.command, config, &config_path).await {
        error!("Command failed: {}", e);
        process::exit(1);
    }
}

async fn run_command(command: Commands, config: Config, config_path: &Path) -> Result<()> {
    match command {
        Commands::Screen {
            job,
            job_text,
            resumes,
            output,
            detailed,
            save,
        } => {
            let output_format = match output {
                Some(format) => cli::parse_output_format(&format).map_err(ResumeScreenerError::InvalidInput)?,
                None => config.output.format,
            };

            let (job_description, job_source) = match (job, job_text) {
                (Some(path), _) => (read_job_description(&path).await?, path.display().to_string()),
                (None, Some(text)) => (text, "<inline>".to_string()),
                (None, None) => (String::new(), String::new()),
            };

            if job_description.trim().is_empty() || resumes.is_empty() {
                return Err(ResumeScreenerError::InvalidInput(
                    "Please provide both job description and resumes for screening.".to_string(),
                ));
            }

            let (uploads, mut skipped) = read_uploads(&resumes).await;

            let started = Instant::now();
            let pipeline = Arc::new(LinguisticPipeline::load(&config.pipeline).await?);
            let backend = pipeline.backend_name().to_string();
            let screener = Screener::new(pipeline, &config.screening)?;

            let spinner = ProgressBar::new_spinner();
            spinner.set_style(
                ProgressStyle::with_template("{spinner:.green} {msg}").unwrap_or_else(|_| ProgressStyle::default_spinner()),
            );
            spinner.set_message("Screening Resumes...");
            spinner.enable_steady_tick(Duration::from_millis(100));

            let results = screener.screen(&job_description, uploads);
            spinner.finish_and_clear();
            let mut results = results?;
            skipped.append(&mut results.skipped);
            results.skipped = skipped;

            info!("Screening complete: {} candidates ranked", results.candidates.len());

            let metadata = ReportMetadata::new(job_source, backend, screener.matcher().vocabulary().len())
                .with_processing_time(started.elapsed().as_millis() as u64);
            let report = ScreeningReport::new(results, metadata);
            if let Some(top) = report.top_candidate() {
                info!("Top candidate: {} ({:.2}%)", top.name, top.score);
            }

            let generator = ReportGenerator::with_options(
                config.output.color_output && save.is_none(),
                detailed || config.output.detailed,
                true,
                true,
            );
            let rendered = generator.generate_report(&report, output_format)?;

            match save {
                Some(path) => {
                    save_report_to_file(&rendered, &path)?;
                    println!("✅ Report saved to {}", path.display());
                }
                None => println!("{}", rendered),
            }
        }

        Commands::Skills { file } => {
            let document = RawDocument::from_path(&file).await?;
            let text = extract_text(&document)?;

            let pipeline = Arc::new(LinguisticPipeline::load(&config.pipeline).await?);
            let matcher = SkillMatcher::new(pipeline)?;
            let skills = matcher.extract_skills(&text)?;

            println!("📄 {}", document.name);
            println!("Candidate: {}", candidate_name(&text));
            if skills.is_empty() {
                println!("{}", "No known skills found.".yellow());
            } else {
                println!("Skills ({}): {}", skills.len(), skills);
            }
        }

        Commands::Vocabulary => {
            let pipeline = Arc::new(LinguisticPipeline::load(&config.pipeline).await?);
            let matcher = SkillMatcher::new(pipeline)?;
            let unmatchable = matcher.unmatchable_entries();

            println!("📚 Skill Vocabulary ({} entries)\n", matcher.vocabulary().len());
            for skill in matcher.vocabulary().iter() {
                if unmatchable.iter().any(|u| u == skill) {
                    println!("  • {} {}", skill, "(not a single token; never matched)".dimmed());
                } else {
                    println!("  • {}", skill);
                }
            }
        }

        Commands::Models { action } => {
            let repo = &config.pipeline.tokenizer_repo;
            let manager = ModelManager::new(config.models_dir().to_path_buf()).await?;

            match action {
                ModelAction::Fetch { force } => {
                    println!("⬇️  Fetching tokenizer: {}", repo);
                    let path = manager.download_tokenizer(repo, force).await?;
                    println!("✅ Tokenizer stored at {}", path.display());
                }

                ModelAction::Status => {
                    println!("Backend: {:?}", config.pipeline.backend);
                    println!("Tokenizer repository: {}", repo);
                    println!("Models directory: {}", manager.models_dir().display());
                    if manager.is_downloaded(repo) {
                        println!("Status: ✅ Downloaded ({})", manager.tokenizer_path(repo).display());
                    } else {
                        println!("Status: ⬇️  Not downloaded");
                        if config.pipeline.backend == TokenizerBackend::HuggingFace {
                            println!("💡 It will be fetched on first use, or run: resume-screener models fetch");
                        }
                    }
                }

                ModelAction::Remove => {
                    if manager.remove(repo).await? {
                        println!("✅ Removed tokenizer for {}", repo);
                    } else {
                        println!("⚠️  Tokenizer for {} is not downloaded", repo);
                    }
                }
            }
        }

        Commands::Config { action } => match action {
            Some(ConfigAction::Show) | None => {
                println!("⚙️  Current Configuration\n");
                let content = toml::to_string_pretty(&config)
                    .map_err(|e| ResumeScreenerError::Configuration(e.to_string()))?;
                println!("{}", content);
            }

            Some(ConfigAction::Path) => {
                println!("{}", config_path.display());
            }

            Some(ConfigAction::Reset) => {
                println!("🔄 Resetting configuration to defaults...");
                Config::default().save_to(config_path)?;
                println!("✅ Configuration reset successfully!");
            }
        },
    }

    Ok(())
}

async fn read_job_description(path: &Path) -> Result<String> {
    cli::validate_file_extension(path, &["txt", "pdf"])
        .map_err(|e| ResumeScreenerError::InvalidInput(format!("Job description file: {}", e)))?;

    let document = RawDocument::from_path(path).await?;
    Ok(extract_text(&document)?.into_string())
}
