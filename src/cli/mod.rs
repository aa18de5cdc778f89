use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use crate::actions;
use crate::scorer::{self, ScoreConfig, ScoreMode};

#[derive(Parser, Debug)]
#[command(name = "pir")]
#[command(version = "0.1")]
#[command(about = "Ranks a text corpus against user interest profiles", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    action: Action,

    // directory holding the .txt corpus
    #[arg(long)]
    corpus: PathBuf,

    // one profile per line: name#interest1#interest2...
    #[arg(long)]
    profiles: PathBuf,

    // one synonym cluster per line: term#similar1#similar2...
    #[arg(long)]
    dictionary: PathBuf,

    #[arg(long, default_value_t = '#')]
    delimiter: char,
}

#[derive(Subcommand, Debug)]
pub enum Action {
    Rank {
        #[arg(long, default_value_t = scorer::DEFAULT_THRESHOLD)]
        threshold: f64,

        #[arg(long, default_value_t = scorer::DEFAULT_MULTIPLIER)]
        multiplier: f64,

        // score by cosine alone instead of weighting it by term coverage
        #[arg(long)]
        cosine_only: bool,

        // span the vector space with the dictionary's canonical terms
        // instead of the profiles' stemmed interests
        #[arg(long)]
        dictionary_vocabulary: bool,

        #[arg(long)]
        json: bool,
    },
    Frequencies {
        #[arg(long)]
        dictionary_vocabulary: bool,

        #[arg(long)]
        json: bool,
    },
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();

    match &cli.action {
        Action::Rank {
            threshold,
            multiplier,
            cosine_only,
            dictionary_vocabulary,
            json,
        } => {
            let mode = if *cosine_only {
                ScoreMode::CosineOnly
            } else {
                ScoreMode::CoverageWeighted {
                    multiplier: *multiplier,
                }
            };
            let config = ScoreConfig {
                threshold: *threshold,
                mode,
            };
            actions::rank::rank(
                &cli.corpus,
                &cli.profiles,
                &cli.dictionary,
                cli.delimiter,
                *dictionary_vocabulary,
                &config,
                *json,
            )
        }
        Action::Frequencies {
            dictionary_vocabulary,
            json,
        } => actions::frequencies::frequencies(
            &cli.corpus,
            &cli.profiles,
            &cli.dictionary,
            cli.delimiter,
            *dictionary_vocabulary,
            *json,
        ),
    }
}
