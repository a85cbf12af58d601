/// Recommend TV shows for one user with both similarity paths.
///
/// Usage: cargo run --example tv_shows -- <user-shows.txt> <shows.txt> [user] [first_n]
///
/// Candidates are the first `first_n` shows (default 100) the user has not
/// watched; the default user is row 499.
use std::env;
use std::error::Error;

use showspace::builder::RecommenderBuilder;
use showspace::config::CfMethod;
use showspace::evaluation::{
    compare_recommendations, max_score, validate_requirements, ValidationThresholds,
};
use showspace::loader::{load_interactions, load_show_names};
use showspace::ranking::Recommendation;

fn print_ranking(method: CfMethod, recs: &[Recommendation]) {
    println!("{} top {}:", method, recs.len());
    for (rank, rec) in recs.iter().enumerate() {
        println!("  {}. [{}] {} (score {:.3})", rank + 1, rec.index, rec.name, rec.score);
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    if args.len() < 3 {
        eprintln!("usage: {} <user-shows.txt> <shows.txt> [user] [first_n]", args[0]);
        std::process::exit(2);
    }
    let user: usize = args.get(3).map(|s| s.parse::<usize>()).transpose()?.unwrap_or(499);
    let first_n: usize = args.get(4).map(|s| s.parse::<usize>()).transpose()?.unwrap_or(100);

    let interactions = load_interactions(&args[1])?;
    let registry = load_show_names(&args[2])?;

    let candidates: Vec<usize> = interactions
        .unseen_items(user)?
        .into_iter()
        .filter(|&j| j < first_n)
        .collect();

    let ctx = RecommenderBuilder::new().with_top_k(5).build(interactions, registry)?;

    let uu = ctx.recommend(user, &candidates, CfMethod::UserUser)?;
    let ii = ctx.recommend(user, &candidates, CfMethod::ItemItem)?;
    print_ranking(CfMethod::UserUser, &uu);
    print_ranking(CfMethod::ItemItem, &ii);

    let overlap = compare_recommendations(&uu, &ii);
    println!("Overlap: {:?}", overlap.common);

    let report = validate_requirements(
        max_score(&uu).unwrap_or(0.0),
        max_score(&ii).unwrap_or(0.0),
        &ValidationThresholds::default(),
    );
    println!(
        "User-User max {:.2} {}, Item-Item max {:.2} {}",
        report.user_user_max,
        if report.user_user_pass { "pass" } else { "fail" },
        report.item_item_max,
        if report.item_item_pass { "pass" } else { "fail" }
    );
    Ok(())
}
