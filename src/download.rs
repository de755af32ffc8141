/*! Corpus archive downloading.

Thin wrapper around blocking HTTP requests: fetches the published
nlp_chinese_corpus archives into a destination directory. Extraction is
left to the operator, and per-archive failures never abort the batch.
!*/
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use log::{debug, info, warn};
use url::Url;

use crate::error::Error;

/// One downloadable corpus archive.
pub struct Dataset {
    pub name: &'static str,
    pub filename: &'static str,
    pub url: &'static str,
    pub size: &'static str,
    pub description: &'static str,
}

/// Archives published by brightmart/nlp_chinese_corpus.
pub const DATASETS: &[Dataset] = &[
    Dataset {
        name: "wiki",
        filename: "wiki2019zh.zip",
        url: "https://drive.google.com/uc?export=download&id=1EdHUZIDpgcBoSqbjlfNKJ3b1t0XIUjbt",
        size: "519MB",
        description: "wiki2019zh, 1.04M encyclopedia articles",
    },
    Dataset {
        name: "news",
        filename: "news2016zh.zip",
        url: "https://drive.google.com/uc?export=download&id=1TMKu1FpTr6kcjWXWlQHX7YJsMfhhcVKp",
        size: "3.6GB",
        description: "news2016zh, 2.5M news articles",
    },
    Dataset {
        name: "baike",
        filename: "baike2018qa.zip",
        url: "https://drive.google.com/uc?export=download&id=1_vgGQZpfSxN_Ng9iTAvE7hM3Z7NVwXP2",
        size: "663MB",
        description: "baike2018qa, 1.5M encyclopedia Q&A pairs",
    },
    Dataset {
        name: "webtext",
        filename: "webtext2019zh.zip",
        url: "https://drive.google.com/uc?export=download&id=1u2yW_XohbYL2YAK6Bzc5XrngHstQTf0v",
        size: "1.7GB",
        description: "webtext2019zh, 4.1M community Q&A entries",
    },
    Dataset {
        name: "translation",
        filename: "translation2019zh.zip",
        url: "https://drive.google.com/uc?export=download&id=1EX8eE5YWBxCaohBO8Fh4e2j3b9C2bTVQ",
        size: "596MB",
        description: "translation2019zh, 5.2M zh-en sentence pairs",
    },
];

/// holds datasets to download and
/// http client that will make the requests.
pub struct Downloader {
    datasets: Vec<&'static Dataset>,
    client: reqwest::blocking::Client,
}

impl Downloader {
    /// Downloader over every known dataset.
    pub fn all() -> Self {
        Self {
            datasets: DATASETS.iter().collect(),
            client: reqwest::blocking::Client::new(),
        }
    }

    /// Downloader over the named datasets.
    /// Fails on the first unknown name.
    pub fn for_names(names: &[String]) -> Result<Self, Error> {
        let datasets = names
            .iter()
            .map(|name| {
                DATASETS
                    .iter()
                    .find(|d| d.name == name.as_str())
                    .ok_or_else(|| Error::UnknownDataset(name.clone()))
            })
            .collect::<Result<Vec<_>, Error>>()?;

        Ok(Self {
            datasets,
            client: reqwest::blocking::Client::new(),
        })
    }

    pub fn datasets(&self) -> &[&'static Dataset] {
        &self.datasets
    }

    /// attempt to download one archive, storing it in `dst`/`filename`.
    fn download_one(&self, dataset: &Dataset, dst: &Path) -> Result<PathBuf, Error> {
        let url = Url::parse(dataset.url)?;
        debug!("downloading {}", &url);

        std::fs::create_dir_all(dst)?;
        let response = self.client.get(url).send()?.error_for_status()?;

        let path = dst.join(dataset.filename);
        let mut out = File::create(&path)?;
        let mut buf = BufReader::new(response);
        std::io::copy(&mut buf, &mut out)?;

        Ok(path)
    }

    /// sequentially download every selected archive.
    pub fn download_all(&self, dst: &Path) -> Vec<Result<PathBuf, Error>> {
        let nb_datasets = self.datasets.len();
        self.datasets
            .iter()
            .enumerate()
            .map(|(idx, dataset)| {
                info!(
                    "downloading {}/{}: {} ({}) - {}",
                    idx + 1,
                    nb_datasets,
                    dataset.name,
                    dataset.size,
                    dataset.description
                );
                let result = self.download_one(dataset, dst);
                if result.is_ok() {
                    warn!(
                        "{} stored as {}; extract it manually before sampling",
                        dataset.name, dataset.filename
                    );
                }
                result
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_names_resolve() {
        let dl = Downloader::for_names(&["wiki".to_string(), "news".to_string()]).unwrap();
        assert_eq!(dl.datasets().len(), 2);
        assert_eq!(dl.datasets()[0].filename, "wiki2019zh.zip");
    }

    #[test]
    fn unknown_name_is_an_error() {
        let result = Downloader::for_names(&["nope".to_string()]);
        assert!(matches!(result, Err(Error::UnknownDataset(_))));
    }

    #[test]
    fn dataset_urls_parse() {
        for dataset in DATASETS {
            assert!(Url::parse(dataset.url).is_ok());
        }
    }
}
