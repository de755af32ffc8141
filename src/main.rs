//! # zhtw-sampler
//!
//! Sampling pipeline that builds the zhtw test corpus from large public
//! Chinese corpora.
//!
//! ## Getting started
//!
//! ```sh
//! zhtw-sampler 0.2.0
//! test corpus sampling tool.
//!
//! USAGE:
//!     zhtw-sampler <SUBCOMMAND>
//!
//! FLAGS:
//!     -h, --help       Prints help information
//!     -V, --version    Prints version information
//!
//! SUBCOMMANDS:
//!     download    Download corpus archives
//!     help        Prints this message or the help of the given subcommand(s)
//!     sample      Sample test fixtures from downloaded corpora
//! ```
use structopt::StructOpt;

#[macro_use]
extern crate log;

use zhtw_sampler::cli;
use zhtw_sampler::download::Downloader;
use zhtw_sampler::error::Error;
use zhtw_sampler::normalize::CommandNormalizer;
use zhtw_sampler::pipelines::{Pipeline, SampleCorpus};

fn main() -> Result<(), Error> {
    env_logger::init();

    let opt = cli::ZhtwSampler::from_args();
    debug!("cli args\n{:#?}", opt);

    match opt {
        cli::ZhtwSampler::Download(d) => {
            let dl = if d.all {
                Downloader::all()
            } else {
                Downloader::for_names(&d.datasets)?
            };
            let results = dl.download_all(&d.dst);

            // report eventual download errors
            for failure in results.iter().filter(|result| result.is_err()) {
                error!("Error during download:\n {:?}", failure);
            }
        }

        cli::ZhtwSampler::Sample(s) => {
            let mut pipeline =
                SampleCorpus::new(s.src, s.dst, s.count, s.seed).with_max_files(s.max_files);
            if let Some(command) = &s.normalizer {
                pipeline = pipeline.with_normalizer(Box::new(CommandNormalizer::new(command)));
            }
            pipeline.run()?;
        }
    };
    Ok(())
}
