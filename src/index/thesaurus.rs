//! Synonym thesaurus: a disjoint-set forest over lower-cased words.
//!
//! Every word is an element of the forest. A synonym class is a tree, named by
//! its root ([`ClassId`]). Loading a synonym group unions the trees of all its
//! words, so groups that share a word merge transitively no matter which line
//! declared them. Words that were never declared become singleton classes the
//! first time they are looked up.

use std::collections::HashMap;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use log::{debug, warn};
use serde::Deserialize;

use crate::types::{ClassId, MatchError, MatchResult};

/// What to do with a synonym file line that holds no words.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecordPolicy {
    /// Fail the whole load with [`MatchError::InvalidThesaurusRecord`].
    #[default]
    Reject,
    /// Log a warning and continue with the next line.
    Skip,
}

/// Word → synonym class mapping with lazily cached singletons.
#[derive(Debug)]
pub struct Thesaurus {
    /// word → element index
    ids: HashMap<String, usize>,
    /// element index → word
    words: Vec<String>,
    /// element index → parent element. Roots point at themselves.
    parent: Vec<usize>,
    /// root index → elements of its class. Empty for non-roots.
    members: Vec<Vec<usize>>,
}

impl Thesaurus {
    /// Create an empty thesaurus.
    pub fn new() -> Self {
        Self {
            ids: HashMap::new(),
            words: Vec::new(),
            parent: Vec::new(),
            members: Vec::new(),
        }
    }

    /// Load synonym groups, one record per group.
    ///
    /// All records are validated before any is applied: if one of them has no
    /// words the call fails with [`MatchError::InvalidThesaurusRecord`] and
    /// the thesaurus is left untouched. Returns the number of groups applied.
    pub fn load<I, R, S>(&mut self, records: I) -> MatchResult<usize>
    where
        I: IntoIterator<Item = R>,
        R: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let records: Vec<Vec<String>> = records
            .into_iter()
            .map(|record| {
                record
                    .into_iter()
                    .map(|word| word.as_ref().trim().to_lowercase())
                    .filter(|word| !word.is_empty())
                    .collect()
            })
            .collect();

        if let Some(pos) = records.iter().position(|record| record.is_empty()) {
            return Err(MatchError::InvalidThesaurusRecord { record: pos + 1 });
        }

        for record in &records {
            self.add_group(record);
        }
        Ok(records.len())
    }

    /// Parse a synonym list: one group per line, words separated by
    /// whitespace. Blank lines are handled according to `policy`.
    pub fn from_reader<R: BufRead>(reader: R, policy: RecordPolicy) -> MatchResult<Self> {
        let mut thesaurus = Self::new();
        let mut groups = 0usize;

        for (index, line) in reader.lines().enumerate() {
            let line = line?;
            let words: Vec<String> = line.split_whitespace().map(str::to_lowercase).collect();

            if words.is_empty() {
                match policy {
                    RecordPolicy::Reject => {
                        return Err(MatchError::InvalidThesaurusRecord { record: index + 1 });
                    }
                    RecordPolicy::Skip => {
                        warn!("Skipping empty synonym group on line {}", index + 1);
                        continue;
                    }
                }
            }

            thesaurus.add_group(&words);
            groups += 1;
        }

        debug!(
            "Loaded {} synonym groups: {} words in {} classes",
            groups,
            thesaurus.word_count(),
            thesaurus.class_count()
        );
        Ok(thesaurus)
    }

    /// Open and parse a synonym file.
    pub fn from_path(path: impl AsRef<Path>, policy: RecordPolicy) -> MatchResult<Self> {
        let file = File::open(path.as_ref())?;
        Self::from_reader(BufReader::new(file), policy)
    }

    /// Class of `word` (case-insensitive). An unseen word gets its own
    /// singleton class, which is cached for later lookups.
    pub fn class_of(&mut self, word: &str) -> ClassId {
        let element = self.element(&word.to_lowercase());
        ClassId(self.root(element))
    }

    /// Class of `word` if it has been seen, without caching anything.
    pub fn find(&self, word: &str) -> Option<ClassId> {
        let &element = self.ids.get(&word.to_lowercase())?;
        Some(ClassId(self.root_of(element)))
    }

    /// Merge the classes of two words and return the merged class.
    pub fn union(&mut self, a: &str, b: &str) -> ClassId {
        let a = self.element(&a.to_lowercase());
        let b = self.element(&b.to_lowercase());
        ClassId(self.union_elements(a, b))
    }

    /// Words of a class, sorted. A stale id (absorbed by a later merge)
    /// resolves to the class that absorbed it.
    pub fn members(&self, class: ClassId) -> Vec<&str> {
        if class.0 >= self.parent.len() {
            return Vec::new();
        }
        let root = self.root_of(class.0);
        let mut words: Vec<&str> = self.members[root]
            .iter()
            .map(|&element| self.words[element].as_str())
            .collect();
        words.sort_unstable();
        words
    }

    /// All words interchangeable with `word`, including itself.
    pub fn synonyms(&mut self, word: &str) -> Vec<&str> {
        let class = self.class_of(word);
        self.members(class)
    }

    /// Whether `word` has been declared or looked up before.
    pub fn contains(&self, word: &str) -> bool {
        self.ids.contains_key(&word.to_lowercase())
    }

    /// Number of distinct words known.
    pub fn word_count(&self) -> usize {
        self.words.len()
    }

    /// Number of synonym classes, singletons included.
    pub fn class_count(&self) -> usize {
        self.members.iter().filter(|m| !m.is_empty()).count()
    }

    /// Whether no word is known.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    // -----------------------------------------------------------------------
    // Forest internals
    // -----------------------------------------------------------------------

    /// Union every (already lower-cased) word of a group into one class.
    fn add_group(&mut self, words: &[String]) {
        let Some((first, rest)) = words.split_first() else {
            return;
        };
        let first = self.element(first);
        for word in rest {
            let other = self.element(word);
            self.union_elements(first, other);
        }
    }

    /// Element index of a lower-cased word, creating a singleton if needed.
    fn element(&mut self, word: &str) -> usize {
        if let Some(&element) = self.ids.get(word) {
            return element;
        }
        let element = self.words.len();
        self.words.push(word.to_string());
        self.parent.push(element);
        self.members.push(vec![element]);
        self.ids.insert(word.to_string(), element);
        element
    }

    /// Root of an element, halving the path on the way up.
    fn root(&mut self, mut element: usize) -> usize {
        while self.parent[element] != element {
            let grandparent = self.parent[self.parent[element]];
            self.parent[element] = grandparent;
            element = grandparent;
        }
        element
    }

    /// Root of an element without compressing the path.
    fn root_of(&self, mut element: usize) -> usize {
        while self.parent[element] != element {
            element = self.parent[element];
        }
        element
    }

    /// Attach the smaller class under the larger one.
    fn union_elements(&mut self, a: usize, b: usize) -> usize {
        let (ra, rb) = (self.root(a), self.root(b));
        if ra == rb {
            return ra;
        }
        let (keep, absorb) = if self.members[ra].len() >= self.members[rb].len() {
            (ra, rb)
        } else {
            (rb, ra)
        };
        self.parent[absorb] = keep;
        let absorbed = std::mem::take(&mut self.members[absorb]);
        self.members[keep].extend(absorbed);
        keep
    }
}

impl Default for Thesaurus {
    fn default() -> Self {
        Self::new()
    }
}
