//! Smoke check: combine the sample project and print the result.
//!
//! Run with `RUST_LOG=info cargo run --bin combine_demo`.

use cohort_criteria::QueryCombiner;
use cohort_criteria::QueryTreeIndex;
use cohort_criteria::utils::render_tree;
use cohort_criteria::utils::test_utils::{
    InMemoryCriteriaRepository, InMemoryMetadataLoader, sample_descendants, sample_metadata,
};

fn main() -> cohort_criteria::Result<()> {
    env_logger::init();

    let combiner = QueryCombiner::new(
        InMemoryMetadataLoader::new(sample_metadata()),
        InMemoryCriteriaRepository::new(sample_descendants()),
    );
    let result = combiner.combine_blocking("demo-project")?;

    match &result.combined {
        Some(combined) => {
            println!("Combined tree:\n{}", render_tree(combined));

            let index = QueryTreeIndex::new(Some(combined));
            println!("Terms: {}", format_ids(index.terms()));
            println!("Groups: {}", format_ids(index.groups()));
            println!("Parent terms: {}", format_ids(index.parent_terms()));

            println!("Answer terms:");
            for (answer_id, term_ids) in result.answer_terms.iter() {
                println!("  {answer_id}: {}", term_ids.join(", "));
            }
            println!("Collected children:");
            for (query_id, collected) in &result.collected_children {
                println!("  {query_id}: {collected}");
            }

            let payload = serde_json::to_string_pretty(combined)
                .map_err(|e| cohort_criteria::CriteriaError::Other(e.into()))?;
            println!("Combined tree as translator payload:\n{payload}");
        }
        None => println!("Project has no searchable criteria"),
    }

    print!("{}", result.diagnostics);
    Ok(())
}

fn format_ids(nodes: &[&cohort_criteria::Query]) -> String {
    nodes
        .iter()
        .map(|node| node.id.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}
