//! Command-line interface for the sample editor.

pub mod commands;

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use crate::formats::ExportDepth;

/// BRR sample editor and converter
#[derive(Parser, Debug)]
#[command(name = "brredit")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum DepthArg {
    #[value(name = "8")]
    Eight,
    #[value(name = "16")]
    Sixteen,
}

impl From<DepthArg> for ExportDepth {
    fn from(arg: DepthArg) -> Self {
        match arg {
            DepthArg::Eight => ExportDepth::Eight,
            DepthArg::Sixteen => ExportDepth::Sixteen,
        }
    }
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Convert a sample between formats, picked by file extension
    #[command(name = "convert")]
    Convert {
        /// Input sample file
        input: PathBuf,

        /// Output sample file
        output: PathBuf,

        /// PCM bit depth for the output, where the format allows it
        #[arg(short, long, value_enum, default_value = "16")]
        depth: DepthArg,
    },

    /// Print sample metadata
    #[command(name = "info")]
    Info {
        /// Sample file to inspect
        path: PathBuf,
    },

    /// Estimate the rate that voices the sample at middle C
    #[command(name = "detect-pitch")]
    DetectPitch {
        /// Sample file to analyze
        path: PathBuf,

        /// Write the detected rate back into the file
        #[arg(short, long)]
        apply: bool,
    },

    /// Resample to a new rate
    #[command(name = "resample")]
    Resample {
        /// Input sample file
        input: PathBuf,

        /// Output sample file
        output: PathBuf,

        /// Target rate in Hz
        #[arg(short, long)]
        rate: f64,
    },
}
