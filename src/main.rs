use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, Result};
use clap::Parser;
use log::{error, info};

use heart_risk::input::{AnswerSource, JsonAnswerSource, PromptSource, collect_answers};
use heart_risk::utils::logging::console::{print_features, print_schema_info, print_score_header};
use heart_risk::utils::logging::progress::DEFAULT_STEP_DELAY;
use heart_risk::utils::logging::{
    create_score_bar, log_cycle_complete, log_cycle_start, log_warning, show_score,
};
use heart_risk::{Evaluation, FormConfig, RandomScorer, Schema, Session, heart_disease_schema};

/// Heart disease risk input form
#[derive(Debug, Parser)]
#[command(name = "heart-risk")]
#[command(version)]
#[command(about = "Collect patient answers and estimate the chance of heart disease", long_about = None)]
struct Args {
    /// Print the schema and exit
    #[arg(long)]
    schema: bool,

    /// Print the feature vector after each evaluation
    #[arg(long)]
    json: bool,

    /// Answers file for a single non-interactive evaluation
    answers: Option<PathBuf>,
}

/// Everything a cycle needs besides its answer source
struct Form {
    schema: Schema,
    session: Session,
    scorer: RandomScorer,
    print_json: bool,
}

impl Form {
    fn evaluate(&mut self, source: &mut dyn AnswerSource) -> heart_risk::Result<Evaluation> {
        let start = Instant::now();
        let answers = collect_answers(&self.schema, source)?;
        let evaluation = self.session.evaluate(
            &self.schema,
            &answers,
            &mut self.scorer,
            heart_risk::utils::today(),
        )?;
        log_cycle_complete(
            self.session.cycles(),
            evaluation.features.len(),
            evaluation.score,
            Some(start.elapsed()),
        );
        Ok(evaluation)
    }

    fn display(&self, out: &mut impl Write, evaluation: &Evaluation) -> Result<()> {
        print_score_header(out, evaluation.score)?;
        out.flush()?;

        let pb = create_score_bar(evaluation.start_position());
        show_score(&pb, evaluation.score, DEFAULT_STEP_DELAY);

        if self.print_json {
            print_features(out, &evaluation.features)?;
        }
        Ok(())
    }
}

fn run_file(form: &mut Form, path: &Path, config: &FormConfig) -> Result<()> {
    let mut source = JsonAnswerSource::from_path(path, config, heart_risk::utils::today())
        .with_context(|| format!("Failed to read answers from {}", path.display()))?;

    for key in source.unused_keys(&form.schema) {
        log_warning("Ignoring answer for undeclared field", Some(key));
    }

    log_cycle_start(form.session.cycles() + 1, &path.display().to_string());
    let evaluation = form
        .evaluate(&mut source)
        .with_context(|| format!("Failed to evaluate answers from {}", path.display()))?;
    form.display(&mut io::stdout().lock(), &evaluation)
}

fn run_interactive<R: BufRead, W: Write>(
    form: &mut Form,
    mut prompts: PromptSource<R, W>,
) -> Result<()> {
    loop {
        log_cycle_start(form.session.cycles() + 1, "terminal");
        writeln!(prompts.writer(), "Inputs")?;

        match form.evaluate(&mut prompts) {
            Ok(evaluation) => form.display(prompts.writer(), &evaluation)?,
            Err(e) => error!("Evaluation failed: {e}"),
        }

        if !prompts.confirm("Evaluate another patient?")? {
            break;
        }
    }

    info!("Finished after {} evaluations", form.session.cycles());
    Ok(())
}

fn main() -> Result<()> {
    // Setup logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    let config = FormConfig::from_env();
    let schema = heart_disease_schema().context("Failed to build the heart disease schema")?;

    if args.schema {
        print_schema_info(&mut io::stdout().lock(), &schema)?;
        return Ok(());
    }

    let mut form = Form {
        schema,
        session: Session::new(config.pipeline),
        scorer: RandomScorer::new(config.random_seed),
        print_json: args.json,
    };

    match &args.answers {
        Some(path) => run_file(&mut form, path, &config),
        None => {
            let prompts = PromptSource::new(
                io::stdin().lock(),
                io::stdout(),
                &config,
                heart_risk::utils::today(),
            );
            run_interactive(&mut form, prompts)
        }
    }
}
