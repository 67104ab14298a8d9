use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use sunpath::Language;

#[derive(Parser, Debug)]
#[command(name = "sunpath", about = "Plot hourly analemmas and monthly sun traces for a location")]
pub struct Args {
    /// JSON file with a full or partial configuration
    #[arg(short = 'c', long = "config")]
    pub config: Option<PathBuf>,

    /// Observer latitude in degrees, north positive
    #[arg(long, allow_hyphen_values = true)]
    pub latitude: Option<f64>,

    /// Observer longitude in degrees, east positive
    #[arg(long, allow_hyphen_values = true)]
    pub longitude: Option<f64>,

    /// Year to sample
    #[arg(short = 'y', long)]
    pub year: Option<i32>,

    /// Ignore daylight saving time
    #[arg(long = "no-dst")]
    pub no_dst: bool,

    /// Language of month names and captions
    #[arg(short = 'l', long, value_enum)]
    pub language: Option<LanguageArg>,

    /// Where to write the SVG chart
    #[arg(short = 'o', long)]
    pub output: Option<PathBuf>,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
pub enum LanguageArg {
    En,
    De,
}

impl From<LanguageArg> for Language {
    fn from(arg: LanguageArg) -> Self {
        match arg {
            LanguageArg::En => Language::English,
            LanguageArg::De => Language::German,
        }
    }
}
