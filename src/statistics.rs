//! Statistics about the searches run during a session.
//! Opt-in; when enabled every search is logged and the whole
//! record is written to a file when the session ends.
use custom_debug_derive::Debug;
use std::{
    fs::File,
    io::Write,
    path::PathBuf,
    time::{Duration, Instant},
};

use crate::debug::opt_fmt;
use crate::Error;

#[derive(Debug)]
pub struct ColouringStatistics {
    pub graph_size: usize,
    pub budget: usize,
    pub colourable: bool,
    pub search_time: Duration,
}

#[derive(Debug)]
pub struct IsomorphismStatistics {
    pub graph_sizes: (usize, usize),
    pub isomorphic: bool,
    pub search_time: Duration,
}

#[derive(Debug)]
pub struct Statistics {
    #[debug(skip)]
    out_file: PathBuf,
    #[debug(skip)]
    start_time: Instant,
    #[debug(with = "opt_fmt")]
    end_time: Option<Duration>,
    max_colouring_time: Option<Duration>,
    max_isomorphism_time: Option<Duration>,
    colouring_searches: Vec<ColouringStatistics>,
    isomorphism_checks: Vec<IsomorphismStatistics>,
}

impl Statistics {
    pub fn new(out_file: PathBuf) -> Self {
        Statistics {
            out_file,
            start_time: Instant::now(),
            end_time: None,
            max_colouring_time: None,
            max_isomorphism_time: None,
            colouring_searches: Vec::new(),
            isomorphism_checks: Vec::new(),
        }
    }

    pub fn log_colouring_search(&mut self, statistic: ColouringStatistics) {
        self.max_colouring_time = Some(
            self.max_colouring_time
                .map_or(statistic.search_time, |max| max.max(statistic.search_time)),
        );
        self.colouring_searches.push(statistic);
    }

    pub fn log_isomorphism_check(&mut self, statistic: IsomorphismStatistics) {
        self.max_isomorphism_time = Some(
            self.max_isomorphism_time
                .map_or(statistic.search_time, |max| max.max(statistic.search_time)),
        );
        self.isomorphism_checks.push(statistic);
    }

    pub fn log_end(&mut self) {
        self.end_time = Some(self.start_time.elapsed());
    }

    pub fn save_statistics(&self) -> Result<(), Error> {
        let mut statistics_file = File::create(&self.out_file)?;
        write!(statistics_file, "Raw Statistics: {:#?}", self).map_err(Error::from)
    }
}
