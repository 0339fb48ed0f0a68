use anyhow::{Context, Result};
use canasta::cli::{Cli, OutputFormat};
use canasta::csv_output::CsvRuleOutput;
use canasta::json_output::JsonOutput;
use canasta::loader;
use canasta::mining::{itemset_names, sort_rules, Rule};
use canasta::pipeline::{MinerConfig, MinerSession, MiningResults};
use clap::Parser;
use tracing_subscriber::EnvFilter;

/// Initialize tracing subscriber for debug output
fn init_tracing(debug: bool) {
    if debug {
        tracing_subscriber::fmt()
            .with_env_filter(
                EnvFilter::from_default_env().add_directive(tracing::Level::DEBUG.into()),
            )
            .with_writer(std::io::stderr)
            .init();
    }
}

/// Render frequent itemsets as an aligned table, smallest sets first
fn render_itemsets(results: &MiningResults) -> String {
    let items = results.matrix.items();
    let mut sets: Vec<(&Vec<usize>, f64)> = results.frequent.iter().collect();
    sets.sort_by(|a, b| (a.0.len(), a.0).cmp(&(b.0.len(), b.0)));

    let mut out = String::new();
    out.push_str(&format!("{:<10} itemset\n", "support"));
    for (itemset, support) in sets {
        out.push_str(&format!(
            "{:<10.4} {{{}}}\n",
            support,
            itemset_names(itemset, items)
        ));
    }
    out.push('\n');
    out
}

/// Render the final rules as an aligned table
fn render_rules(rules: &[Rule], items: &[String]) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "{:<40} {:>8} {:>10} {:>8} {:>9} {:>10}\n",
        "rule", "support", "confidence", "lift", "leverage", "conviction"
    ));
    for rule in rules {
        let arrow = format!(
            "{{{}}} -> {{{}}}",
            itemset_names(&rule.antecedent, items),
            itemset_names(&rule.consequent, items)
        );
        out.push_str(&format!(
            "{:<40} {:>8.4} {:>10.4} {:>8.4} {:>9.4} {:>10.4}\n",
            arrow, rule.support, rule.confidence, rule.lift, rule.leverage, rule.conviction
        ));
    }
    if rules.is_empty() {
        out.push_str("(no rules passed the thresholds)\n");
    }
    out
}

fn main() -> Result<()> {
    let args = Cli::parse();
    init_tracing(args.debug);

    let transactions = loader::load_transactions(
        &args.input,
        args.sep,
        &args.transaction_col,
        &args.item_col,
    )?;

    let config = MinerConfig {
        min_support: args.min_support,
        metric: args.metric.into(),
        metric_threshold: args.metric_threshold,
        confidence_threshold: args.confidence_threshold,
    };
    let mut session = MinerSession::new(config);
    session.run(&transactions)?;
    let results = session.results()?;

    let mut rules = results.rules.clone();
    if let Some(metric) = args.sort_by {
        sort_rules(&mut rules, metric.into());
    }

    let rendered = match args.format {
        OutputFormat::Text => {
            let mut out = String::new();
            if args.show_itemsets {
                out.push_str(&render_itemsets(results));
            }
            out.push_str(&render_rules(&rules, results.matrix.items()));
            out
        }
        OutputFormat::Json => {
            let mut output = JsonOutput::new(results.matrix.n_rows(), results.matrix.n_items());
            output.set_frequent_itemsets(&results.frequent);
            for rule in &rules {
                output.add_rule(rule, results.matrix.items());
            }
            output.to_json()?
        }
        OutputFormat::Csv => CsvRuleOutput::from_rules(&rules, results.matrix.items()).to_csv(),
    };

    match &args.output {
        Some(path) => {
            std::fs::write(path, &rendered)
                .with_context(|| format!("failed to write {}", path.display()))?;
            eprintln!("rules written to {}", path.display());
        }
        None => print!("{rendered}"),
    }

    Ok(())
}
