//! Session-lifetime memoization of the base dataset.
//!
//! The base dataset is immutable once built, so it is handed out as a
//! shared slice. Keys include `today` because the date window moves with it.

use std::{collections::HashMap, sync::Arc};

use chrono::NaiveDate;

use crate::{error::DashResult, generator::Generator, record::IncidentRecord};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DatasetKey {
    pub count: usize,
    pub seed:  u64,
    pub today: NaiveDate,
}

pub struct DatasetCache {
    generator: Generator,
    datasets:  HashMap<DatasetKey, Arc<[IncidentRecord]>>,
}

impl DatasetCache {
    pub fn new(generator: Generator) -> Self {
        Self { generator, datasets: HashMap::new() }
    }

    pub fn get_or_generate(&mut self, key: DatasetKey) -> DashResult<Arc<[IncidentRecord]>> {
        if let Some(records) = self.datasets.get(&key) {
            return Ok(Arc::clone(records));
        }
        let records: Arc<[IncidentRecord]> =
            self.generator.generate(key.count, key.seed, key.today)?.into();
        self.datasets.insert(key, Arc::clone(&records));
        Ok(records)
    }

    pub fn len(&self) -> usize {
        self.datasets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.datasets.is_empty()
    }
}
