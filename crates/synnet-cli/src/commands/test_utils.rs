//! Fixture files written to a temporary directory.

use std::fs;
use std::path::PathBuf;

use indoc::indoc;
use synnet_lib::ConceptIndex;
use tempfile::TempDir;

pub const SYNSETS: &str = indoc! {"
    0,entity,that which exists
    1,physical_entity,an entity that has physical existence
    2,abstraction,a general concept
    3,organism being,a living thing
    4,person individual,a human being
    5,edible_fruit,edible reproductive body of a seed plant
    6,apple,fruit with red or yellow or green skin, crisp flesh
    7,banana,elongated yellow fruit
    8,location,a point or extent in space
    9,city,a large and densely populated urban area
"};

pub const HYPERNYMS: &str = indoc! {"
    1,0
    2,0
    3,1
    4,3
    5,1
    6,5
    7,5
    8,1
    9,8
"};

pub struct Fixture {
    pub dir: TempDir,
    pub index: ConceptIndex,
}

impl Fixture {
    pub fn new() -> Self {
        let dir = TempDir::new().unwrap();
        let synsets = write_in(&dir, "synsets.txt", SYNSETS);
        let hypernyms = write_in(&dir, "hypernyms.txt", HYPERNYMS);
        let index = ConceptIndex::from_files(synsets, hypernyms).unwrap();
        Self { dir, index }
    }

    pub fn write(&self, name: &str, contents: &str) -> PathBuf {
        write_in(&self.dir, name, contents)
    }

    /// Replace the temporary directory in `output` with `<dir>`.
    pub fn normalize(&self, output: &str) -> String {
        output.replace(&self.dir.path().display().to_string(), "<dir>")
    }
}

fn write_in(dir: &TempDir, name: &str, contents: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, contents).unwrap();
    path
}

pub fn pair(noun1: &str, noun2: &str) -> [String; 2] {
    [noun1.to_owned(), noun2.to_owned()]
}
