//! Digest distribution lab.
//!
//! Compares the additive and polynomial digest strategies over random
//! string keys: per-bucket chain lengths, collision statistics, and an
//! anagram demonstration, with the chain-length distribution rendered to
//! `digest_distribution.png`. Consumes the library only through its
//! public operations.
#![allow(
    clippy::arithmetic_side_effects,
    clippy::cast_precision_loss,
    clippy::indexing_slicing,
    clippy::missing_docs_in_private_items,
    clippy::unwrap_used
)]

use chainmap::{ChainedMap, HashStrategy, MapExtensions};
use plotters::prelude::*;
use rand::Rng;
use rand::distr::Alphanumeric;
use std::ops::RangeInclusive;

// Fixed capacity so both strategies face the same bucket range
const BUCKET_COUNT: usize = 512;
const KEY_COUNT: usize = 4096;
const KEY_LENGTH_RANGE: RangeInclusive<usize> = 2..=12;

// Strategies to compare
const STRATEGIES: [(&str, HashStrategy); 2] =
    [("Additive", HashStrategy::Additive), ("Polynomial", HashStrategy::Polynomial)];

const ANAGRAMS: [(&str, &str); 3] = [("ab", "ba"), ("listen", "silent"), ("stressed", "desserts")];

fn random_key(rng: &mut impl Rng) -> String {
    let length = rng.random_range(KEY_LENGTH_RANGE);
    (0..length).map(|_| char::from(rng.sample(Alphanumeric))).collect()
}

// Per-bucket chain lengths for a set of unique keys
fn chain_lengths(strategy: HashStrategy, keys: &[String]) -> Vec<usize> {
    let mut lengths = vec![0_usize; BUCKET_COUNT];
    for key in keys {
        lengths[strategy.bucket_index(key.as_str(), BUCKET_COUNT)] += 1;
    }
    lengths
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let mut rng = rand::rng();
    let keys: Vec<String> = (0..KEY_COUNT).map(|_| random_key(&mut rng)).collect();

    println!("Inserting {KEY_COUNT} random keys into {BUCKET_COUNT} buckets");

    // distributions[strategy] maps chain length -> number of buckets
    let mut distributions: Vec<Vec<usize>> = Vec::new();
    let mut max_chain_overall = 0_usize;

    for &(name, strategy) in &STRATEGIES {
        // Resizing disabled: the point is to observe chains under pressure
        let mut map = ChainedMap::with_config(BUCKET_COUNT, strategy, 0)?;
        for key in &keys {
            map.insert(key.clone(), ());
        }

        // Duplicate keys generated by chance overwrite in place, so take
        // the de-duplicated view back out of the map
        let unique_keys = map.keys();
        let lengths = chain_lengths(strategy, &unique_keys);

        let occupied = lengths.iter().filter(|&&length| length > 0).count();
        let max_chain = lengths.iter().copied().max().unwrap_or(0);
        let average_chain =
            if occupied == 0 { 0.0 } else { map.len() as f64 / occupied as f64 };
        let collisions = map.len() - occupied;

        println!(
            "  {}: {} unique keys, {} occupied buckets, {} collisions, max chain = {}, avg occupied chain = {:.2}, load factor = {:.2}",
            name,
            map.len(),
            occupied,
            collisions,
            max_chain,
            average_chain,
            map.load_factor()
        );

        max_chain_overall = max_chain_overall.max(max_chain);
        let mut histogram = vec![0_usize; max_chain + 1];
        for &length in &lengths {
            histogram[length] += 1;
        }
        distributions.push(histogram);
    }

    // Same x-range for both series
    for histogram in &mut distributions {
        histogram.resize(max_chain_overall + 1, 0);
    }

    println!("\nAnagram digests (additive collides, polynomial separates):");
    for (left, right) in ANAGRAMS {
        let additive_left = HashStrategy::Additive.digest(left);
        let additive_right = HashStrategy::Additive.digest(right);
        let polynomial_left = HashStrategy::Polynomial.digest(left);
        let polynomial_right = HashStrategy::Polynomial.digest(right);
        println!(
            "  {left} / {right}: additive {additive_left} vs {additive_right}, polynomial {polynomial_left} vs {polynomial_right}"
        );
    }

    let font_family = "sans-serif";
    let colors = [
        RGBColor(220, 50, 50), // Bright red
        RGBColor(50, 90, 220), // Bright blue
    ];
    let line_width = 2;
    let marker_size = 4;
    let text_size = 16;
    let title_size = 35;

    let root = BitMapBackend::new("digest_distribution.png", (1200, 800)).into_drawing_area();
    root.fill(&WHITE)?;

    let max_count =
        distributions.iter().flat_map(|histogram| histogram.iter()).copied().max().unwrap_or(1);

    let mut chart = ChartBuilder::on(&root)
        .caption("Chain Length Distribution by Digest Strategy", (font_family, title_size))
        .margin(15)
        .x_label_area_size(60)
        .y_label_area_size(60)
        .build_cartesian_2d(0..max_chain_overall + 1, 0..max_count + max_count / 10 + 1)?;

    chart
        .configure_mesh()
        .x_desc("Chain Length (entries per bucket)")
        .y_desc("Number of Buckets")
        .axis_desc_style((font_family, text_size))
        .draw()?;

    for (strategy_idx, &(name, _)) in STRATEGIES.iter().enumerate() {
        let color = colors[strategy_idx % colors.len()];
        let line_style = ShapeStyle::from(&color).stroke_width(line_width);
        let histogram = &distributions[strategy_idx];

        chart
            .draw_series(LineSeries::new(
                histogram.iter().enumerate().map(|(length, &count)| (length, count)),
                line_style,
            ))?
            .label(name)
            .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], line_style));

        chart.draw_series(
            histogram
                .iter()
                .enumerate()
                .map(|(length, &count)| Circle::new((length, count), marker_size, color.filled())),
        )?;
    }

    chart
        .configure_series_labels()
        .background_style(&WHITE.mix(0.8))
        .border_style(&BLACK)
        .position(SeriesLabelPosition::UpperRight)
        .draw()?;

    root.present()?;
    println!("\nWrote digest_distribution.png");

    Ok(())
}
