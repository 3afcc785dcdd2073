// demos/selection.rs
// Run with:
//   RUST_LOG=skill_luck=debug cargo run --release --example selection

use skill_luck::{Attribute, SimConfig, run_seeded};
use tracing_subscriber::EnvFilter;

const BINS: usize = 20;
const BAR_WIDTH: usize = 40;

fn bar(count: usize, max: usize) -> String {
    let n = if max > 0 { count * BAR_WIDTH / max } else { 0 };
    "#".repeat(n)
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cfg = SimConfig::default().with_seed(42);
    let run = run_seeded(&cfg)?;

    println!(
        "== {} candidates, top {}, luck weight {} ==",
        cfg.population_size, cfg.num_candidates, cfg.luck_weight
    );
    println!("skill overlap: {:.1}%", run.skill_overlap() * 100.0);

    for attr in Attribute::ALL {
        let cmp = run.compare(attr, BINS)?;
        println!();
        println!(
            "[{attr}] selected mean {:.4} (sd {:.4}) | population mean {:.4} (sd {:.4})",
            cmp.selected.mean, cmp.selected.std_dev, cmp.population.mean, cmp.population.std_dev
        );
        let sel_max = cmp.selected_hist.counts.iter().copied().max().unwrap_or(0);
        let pop_max = cmp.population_hist.counts.iter().copied().max().unwrap_or(0);
        for i in 0..cmp.population_hist.bins() {
            println!(
                "{:>7.3} | {:<w$} | {}",
                cmp.population_hist.edge(i),
                bar(cmp.selected_hist.counts[i], sel_max),
                bar(cmp.population_hist.counts[i], pop_max),
                w = BAR_WIDTH
            );
        }
    }
    Ok(())
}
