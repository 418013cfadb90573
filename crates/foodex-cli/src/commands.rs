//! Command dispatch: catalogue loading, validation, output.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result, anyhow};
use serde::Serialize;
use tracing::info;

use foodex_catalogue::{Catalogue, HierarchyResolver, csv_utils};
use foodex_model::{TermCode, ValidationContext};
use foodex_validate::{Validator, ValidatorConfig};

use crate::cli::{CatalogueCommand, Cli, Command};
use crate::summary;

pub fn run(cli: Cli) -> Result<()> {
    let catalogue_dir = cli
        .catalogue_dir
        .clone()
        .unwrap_or_else(csv_utils::default_catalogue_root);
    let catalogue = Arc::new(
        Catalogue::load(&catalogue_dir)
            .with_context(|| format!("load catalogue from {}", catalogue_dir.display()))?,
    );

    match cli.command {
        Command::Validate {
            expression,
            context,
            json,
            allow_high,
        } => {
            let validator =
                Validator::with_config(catalogue, build_config(context.as_deref(), allow_high)?);
            let result = validator.validate(&expression)?;

            match json {
                Some(path) => write_json(&path, &result)?,
                None => summary::print_result(&result),
            }

            if result.valid {
                Ok(())
            } else {
                Err(anyhow!("expression is invalid"))
            }
        }

        Command::Batch {
            input,
            json,
            allow_high,
        } => {
            let validator =
                Validator::with_config(catalogue, build_config(None, allow_high)?);
            let contents = std::fs::read_to_string(&input)
                .with_context(|| format!("read {}", input.display()))?;
            let expressions: Vec<String> = contents
                .lines()
                .map(str::trim)
                .filter(|line| !line.is_empty())
                .map(String::from)
                .collect();

            info!(expression_count = expressions.len(), "validating batch");
            let results = validator.validate_batch(&expressions)?;
            let invalid = results.iter().filter(|r| !r.valid).count();

            match json {
                Some(path) => write_json(&path, &results)?,
                None => {
                    for result in &results {
                        summary::print_batch_line(result);
                    }
                    println!("{} expression(s), {} invalid", results.len(), invalid);
                }
            }

            if invalid == 0 {
                Ok(())
            } else {
                Err(anyhow!("{invalid} expression(s) are invalid"))
            }
        }

        Command::Catalogue { command } => run_catalogue(catalogue, command),
    }
}

fn run_catalogue(catalogue: Arc<Catalogue>, command: CatalogueCommand) -> Result<()> {
    match command {
        CatalogueCommand::Summary => {
            let summary = catalogue.summary();
            println!("Terms: {}", summary.term_count);
            println!("Hierarchies: {}", summary.hierarchy_count);
            println!("Hierarchy placements: {}", summary.edge_count);
            println!("Forbidden processes: {}", summary.forbidden_process_count);
            println!("Rule messages: {}", summary.rule_message_count);
            Ok(())
        }

        CatalogueCommand::Term { code, hierarchy } => {
            let code = TermCode::new(code.to_ascii_uppercase()).map_err(|e| anyhow!(e))?;
            let Some(term) = catalogue.term(&code) else {
                return Err(anyhow!("term {code} not found"));
            };

            println!("{}: {}", term.code, term.name());
            println!("  type: {}", term.term_type);
            if let Some(detail) = &term.detail_level {
                println!("  detail level: {detail}");
            }
            println!("  status: {}", term.status);
            if term.deprecated {
                println!("  deprecated: yes");
            }
            if !term.implicit_facets.is_empty() {
                let facets: Vec<String> = term
                    .implicit_facets
                    .iter()
                    .map(ToString::to_string)
                    .collect();
                println!("  implicit facets: {}", facets.join(", "));
            }

            let resolver = HierarchyResolver::new(Arc::clone(&catalogue));
            if catalogue.is_member(&code, &hierarchy) {
                let chain = resolver.ancestors(&code, &hierarchy)?;
                let mut path: Vec<&str> =
                    chain.iter().rev().map(TermCode::as_str).collect();
                path.push(code.as_str());
                println!("  {hierarchy} path: {}", path.join(" > "));
            } else {
                println!("  not a member of '{hierarchy}'");
            }
            Ok(())
        }

        CatalogueCommand::Search { query, limit } => {
            let hits = catalogue.search(&query, limit);
            if hits.is_empty() {
                println!("no terms match '{query}'");
                return Ok(());
            }
            for term in hits {
                let flag = if term.deprecated { " [deprecated]" } else { "" };
                println!("{}  {}{}", term.code, term.name(), flag);
            }
            Ok(())
        }
    }
}

fn build_config(context: Option<&str>, allow_high: bool) -> Result<ValidatorConfig> {
    let mut config = ValidatorConfig::default().high_is_blocking(!allow_high);
    if let Some(raw) = context {
        let context: ValidationContext = raw
            .parse()
            .map_err(|_| anyhow!("unknown context '{raw}' (ict, dcf, internal, external)"))?;
        config = config.with_context(context);
    }
    Ok(config)
}

fn write_json<T: Serialize>(path: &str, value: &T) -> Result<()> {
    let out = serde_json::to_string_pretty(value)?;
    if path == "-" {
        println!("{out}");
    } else {
        std::fs::write(path, out).with_context(|| format!("write {path}"))?;
        println!("wrote {path}");
    }
    Ok(())
}
