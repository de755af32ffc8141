//! Command line arguments and parameters management/parsing.
use std::path::PathBuf;

use structopt::StructOpt;

#[derive(Debug, StructOpt)]
#[structopt(name = "zhtw-sampler", about = "test corpus sampling tool.")]
/// Holds every command that is callable by the `zhtw-sampler` command.
pub enum ZhtwSampler {
    #[structopt(about = "Download corpus archives")]
    Download(Download),
    #[structopt(about = "Sample test fixtures from downloaded corpora")]
    Sample(Sample),
}

#[derive(Debug, StructOpt)]
/// Download command and parameters.
pub struct Download {
    #[structopt(help = "dataset names (wiki, news, webtext, baike, translation)")]
    pub datasets: Vec<String>,
    #[structopt(short = "a", long = "all", help = "download every known dataset")]
    pub all: bool,
    #[structopt(
        parse(from_os_str),
        short = "d",
        long = "dst",
        default_value = "large",
        help = "download destination"
    )]
    pub dst: PathBuf,
}

#[derive(Debug, StructOpt)]
/// Sample command and parameters.
///
/// ```sh
/// zhtw-sampler-sample 0.2.0
/// Sample test fixtures from downloaded corpora
///
/// USAGE:
///     zhtw-sampler sample [OPTIONS]
///
/// FLAGS:
///     -h, --help       Prints help information
///     -V, --version    Prints version information
///
/// OPTIONS:
///         --count <count>              samples per category [default: 50]
///         --max-files <max-files>      files read per category [default: 10]
///         --normalizer <normalizer>    external command generating expected outputs
///         --output <dst>               output directory [default: samples]
///         --seed <seed>                random seed [default: 42]
///         --source <src>               corpus source directory [default: large]
/// ```
pub struct Sample {
    #[structopt(
        parse(from_os_str),
        long = "source",
        default_value = "large",
        help = "corpus source directory"
    )]
    pub src: PathBuf,
    #[structopt(
        parse(from_os_str),
        long = "output",
        default_value = "samples",
        help = "output directory"
    )]
    pub dst: PathBuf,
    #[structopt(long = "count", default_value = "50", help = "samples per category")]
    pub count: usize,
    #[structopt(long = "seed", default_value = "42", help = "random seed")]
    pub seed: u64,
    #[structopt(
        long = "max-files",
        default_value = "10",
        help = "files read per category"
    )]
    pub max_files: usize,
    #[structopt(
        long = "normalizer",
        help = "external command generating expected outputs (stdin -> stdout)"
    )]
    pub normalizer: Option<String>,
}
