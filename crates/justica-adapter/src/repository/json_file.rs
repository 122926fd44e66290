//! JSON lines Hero Store with rewrite-and-replace mutations.
//!
//! One hero per line, in insertion order. There is no index: point reads
//! scan from the top, and update/delete stream the whole file into a
//! sibling temp file before atomically renaming it over the original.

use std::fs::{self, File, OpenOptions};
use std::io::{BufRead, BufReader, BufWriter, Read, Seek, SeekFrom, Write};
use std::path::{Path, PathBuf};

use justica_domain::model::hero::{Hero, HeroDraft, HeroId};
use justica_domain::model::page::Page;
use justica_domain::repository::hero_store::{HeroStore, StoreError};
use tracing::{debug, info, warn};

/// Suffix appended to the data file name to build the temp file name
const TEMP_SUFFIX: &str = ".tmp";

/// JSON lines file store
#[derive(Debug)]
pub struct JsonFileHeroStore {
    path: PathBuf,
    temp_path: PathBuf,
    size: usize,
}

impl JsonFileHeroStore {
    /// Open the data file, creating it and its directory if needed.
    ///
    /// The size is recomputed from the line count on every open, and a
    /// temp file left by an interrupted rewrite is discarded.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let path = path.into();
        let invalid = |reason: &str| StoreError::InvalidPath {
            path: path.display().to_string(),
            reason: reason.to_string(),
        };

        if path.as_os_str().is_empty() {
            return Err(invalid("path is empty"));
        }
        let file_name = path
            .file_name()
            .ok_or_else(|| invalid("path must name a file"))?;
        let dir = match path.parent() {
            Some(dir) if !dir.as_os_str().is_empty() => dir,
            _ => return Err(invalid("cannot be a root directory nor lack a directory")),
        };

        fs::create_dir_all(dir)?;
        let mut file = OpenOptions::new()
            .create(true)
            .read(true)
            .append(true)
            .open(&path)?;
        if !ends_with_newline(&mut file)? {
            warn!(path = %path.display(), "Terminating an unterminated last line");
            file.write_all(b"\n")?;
            file.sync_all()?;
        }
        drop(file);

        let mut temp_name = file_name.to_os_string();
        temp_name.push(TEMP_SUFFIX);
        let temp_path = dir.join(temp_name);
        if temp_path.exists() {
            warn!(path = %temp_path.display(), "Discarding temp file from an interrupted rewrite");
            fs::remove_file(&temp_path)?;
        }

        let size = count_lines(&path)?;
        info!(path = %path.display(), size, "Opened JSON hero store");

        Ok(Self {
            path,
            temp_path,
            size,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn reader(&self) -> Result<BufReader<File>, StoreError> {
        Ok(BufReader::new(File::open(&self.path)?))
    }

    /// Stream the data file into the temp file, dropping or replacing the
    /// first line whose id matches, then swap the temp file in.
    ///
    /// Returns whether a line matched. On error the temp file is removed
    /// and the data file is left as it was.
    fn rewrite(&self, id: &HeroId, replacement: Option<HeroDraft>) -> Result<bool, StoreError> {
        let swapped = self.copy_to_temp(id, replacement).and_then(|changed| {
            if changed {
                fs::rename(&self.temp_path, &self.path)?;
            }
            Ok(changed)
        });

        match swapped {
            Ok(true) => Ok(true),
            Ok(false) => {
                fs::remove_file(&self.temp_path)?;
                Ok(false)
            }
            Err(err) => {
                let _ = fs::remove_file(&self.temp_path);
                Err(err)
            }
        }
    }

    fn copy_to_temp(
        &self,
        id: &HeroId,
        mut replacement: Option<HeroDraft>,
    ) -> Result<bool, StoreError> {
        let reader = self.reader()?;
        let mut writer = BufWriter::new(File::create(&self.temp_path)?);
        let mut changed = false;

        for (index, line) in reader.lines().enumerate() {
            let line = line?;
            if changed {
                writeln!(writer, "{line}")?;
                continue;
            }

            let hero = decode(&line, index + 1)?;
            if hero.id() != id {
                writeln!(writer, "{line}")?;
                continue;
            }

            changed = true;
            if let Some(draft) = replacement.take() {
                writeln!(writer, "{}", encode(&draft.into_hero(*id))?)?;
            }
        }

        let file = writer.into_inner().map_err(|err| err.into_error())?;
        file.sync_all()?;
        Ok(changed)
    }
}

impl HeroStore for JsonFileHeroStore {
    fn register(&mut self, hero: Hero) -> Result<bool, StoreError> {
        let line = encode(&hero)?;

        let mut file = OpenOptions::new().append(true).open(&self.path)?;
        writeln!(file, "{line}")?;

        self.size += 1;
        info!(id = %hero.id(), size = self.size, "Registered hero in JSON store");
        Ok(true)
    }

    fn get_page(&self, page: Page) -> Result<Vec<Hero>, StoreError> {
        debug!(page = page.number(), rows = page.rows(), "Reading page from JSON store");

        self.reader()?
            .lines()
            .enumerate()
            .skip(page.offset())
            .take(page.rows())
            .map(|(index, line)| decode(&line?, index + 1))
            .collect()
    }

    fn get(&self, id: &HeroId) -> Result<Option<Hero>, StoreError> {
        for (index, line) in self.reader()?.lines().enumerate() {
            let hero = decode(&line?, index + 1)?;
            if hero.id() == id {
                return Ok(Some(hero));
            }
        }
        Ok(None)
    }

    fn update(&mut self, id: &HeroId, draft: HeroDraft) -> Result<bool, StoreError> {
        let changed = self.rewrite(id, Some(draft))?;
        if changed {
            info!(id = %id, "Updated hero in JSON store");
        } else {
            debug!(id = %id, "No hero to update in JSON store");
        }
        Ok(changed)
    }

    fn delete(&mut self, id: &HeroId) -> Result<bool, StoreError> {
        let changed = self.rewrite(id, None)?;
        if changed {
            self.size -= 1;
            info!(id = %id, size = self.size, "Deleted hero from JSON store");
        } else {
            debug!(id = %id, "No hero to delete in JSON store");
        }
        Ok(changed)
    }

    fn size(&self) -> usize {
        self.size
    }
}

/// True for an empty file or one whose last byte is a newline
fn ends_with_newline(file: &mut File) -> Result<bool, StoreError> {
    if file.metadata()?.len() == 0 {
        return Ok(true);
    }

    let mut last = [0u8; 1];
    file.seek(SeekFrom::End(-1))?;
    file.read_exact(&mut last)?;
    Ok(last[0] == b'\n')
}

fn count_lines(path: &Path) -> Result<usize, StoreError> {
    let mut count = 0;
    for line in BufReader::new(File::open(path)?).lines() {
        line?;
        count += 1;
    }
    Ok(count)
}

fn encode(hero: &Hero) -> Result<String, StoreError> {
    serde_json::to_string(hero).map_err(|err| StoreError::Encode {
        id: *hero.id(),
        message: err.to_string(),
    })
}

fn decode(line: &str, line_number: usize) -> Result<Hero, StoreError> {
    serde_json::from_str(line).map_err(|err| StoreError::Corrupt {
        line: line_number,
        message: err.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use tempfile::TempDir;

    fn hero(alias: &str) -> Hero {
        Hero::new(
            HeroId::new_v4(),
            alias,
            NaiveDate::from_ymd_opt(1959, 10, 1).unwrap(),
            "Harold",
            "Jordan",
        )
    }

    fn data_path(dir: &TempDir) -> PathBuf {
        dir.path().join("CRUD da Justica").join("heroData.json")
    }

    fn filled(dir: &TempDir, count: usize) -> (JsonFileHeroStore, Vec<Hero>) {
        let mut store = JsonFileHeroStore::open(data_path(dir)).unwrap();
        let heroes: Vec<Hero> = (0..count).map(|i| hero(&format!("Hero {i}"))).collect();
        for h in &heroes {
            store.register(h.clone()).unwrap();
        }
        (store, heroes)
    }

    fn all(store: &JsonFileHeroStore) -> Vec<Hero> {
        store.get_page(Page::new(1, 1000)).unwrap()
    }

    #[test]
    fn test_open_creates_directory_and_file() {
        let dir = TempDir::new().unwrap();
        let path = data_path(&dir);

        let store = JsonFileHeroStore::open(&path).unwrap();

        assert!(path.exists());
        assert_eq!(store.size(), 0);
        assert!(store.get_page(Page::new(1, 10)).unwrap().is_empty());
    }

    #[test]
    fn test_open_is_idempotent_and_counts_lines() {
        let dir = TempDir::new().unwrap();
        let (_, heroes) = filled(&dir, 7);

        let reopened = JsonFileHeroStore::open(data_path(&dir)).unwrap();

        assert_eq!(reopened.size(), 7);
        assert_eq!(all(&reopened), heroes);
    }

    #[test]
    fn test_open_rejects_root_and_empty_paths() {
        assert!(matches!(
            JsonFileHeroStore::open(""),
            Err(StoreError::InvalidPath { .. })
        ));
        assert!(matches!(
            JsonFileHeroStore::open("/"),
            Err(StoreError::InvalidPath { .. })
        ));
        assert!(matches!(
            JsonFileHeroStore::open("heroData.json"),
            Err(StoreError::InvalidPath { .. })
        ));
    }

    #[test]
    fn test_open_discards_stale_temp_file() {
        let dir = TempDir::new().unwrap();
        let (store, _) = filled(&dir, 2);
        let temp_path = store.temp_path.clone();
        fs::write(&temp_path, "half a rewrite").unwrap();

        let reopened = JsonFileHeroStore::open(data_path(&dir)).unwrap();

        assert!(!temp_path.exists());
        assert_eq!(reopened.size(), 2);
    }

    #[test]
    fn test_register_after_unterminated_last_line() {
        let dir = TempDir::new().unwrap();
        let path = data_path(&dir);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        let atom = hero("Atom");
        fs::write(&path, serde_json::to_string(&atom).unwrap()).unwrap();

        let mut store = JsonFileHeroStore::open(&path).unwrap();
        assert_eq!(store.size(), 1);

        let sandman = hero("Sandman");
        store.register(sandman.clone()).unwrap();

        assert_eq!(store.size(), 2);
        assert_eq!(fs::read_to_string(&path).unwrap().lines().count(), 2);
        assert_eq!(store.get(atom.id()).unwrap(), Some(atom.clone()));
        assert_eq!(store.get(sandman.id()).unwrap(), Some(sandman.clone()));
        assert_eq!(all(&store), vec![atom, sandman]);
    }

    #[test]
    fn test_open_leaves_terminated_file_untouched() {
        let dir = TempDir::new().unwrap();
        filled(&dir, 3);
        let before = fs::read_to_string(data_path(&dir)).unwrap();

        let reopened = JsonFileHeroStore::open(data_path(&dir)).unwrap();

        assert_eq!(fs::read_to_string(data_path(&dir)).unwrap(), before);
        assert_eq!(reopened.size(), 3);
    }

    #[test]
    fn test_register_writes_one_line() {
        let dir = TempDir::new().unwrap();
        let mut store = JsonFileHeroStore::open(data_path(&dir)).unwrap();
        let superman = Hero::new(
            HeroId::new_v4(),
            "Superman",
            NaiveDate::from_ymd_opt(1938, 6, 1).unwrap(),
            "Clark",
            "Kent",
        );

        assert!(store.register(superman.clone()).unwrap());

        let content = fs::read_to_string(data_path(&dir)).unwrap();
        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(lines.len(), 1);
        assert_eq!(serde_json::from_str::<Hero>(lines[0]).unwrap(), superman);
        assert!(lines[0].contains("\"firstName\":\"Clark\""));
        assert_eq!(store.size(), 1);
    }

    #[test]
    fn test_register_and_get() {
        let dir = TempDir::new().unwrap();
        let (mut store, _) = filled(&dir, 3);
        let lantern = hero("Green Lantern");

        store.register(lantern.clone()).unwrap();

        assert_eq!(store.get(lantern.id()).unwrap(), Some(lantern));
        assert_eq!(store.get(&HeroId::new_v4()).unwrap(), None);
    }

    #[test]
    fn test_get_page_takes_at_most_rows() {
        let dir = TempDir::new().unwrap();
        let (store, heroes) = filled(&dir, 25);

        assert_eq!(store.get_page(Page::new(1, 10)).unwrap(), heroes[..10].to_vec());
        assert_eq!(store.get_page(Page::new(2, 10)).unwrap(), heroes[10..20].to_vec());
        assert_eq!(store.get_page(Page::new(3, 10)).unwrap(), heroes[20..].to_vec());
        assert!(store.get_page(Page::new(4, 10)).unwrap().is_empty());
    }

    #[test]
    fn test_repeated_reads_are_identical() {
        let dir = TempDir::new().unwrap();
        let (store, _) = filled(&dir, 12);

        let first = store.get_page(Page::new(2, 10)).unwrap();
        let second = store.get_page(Page::new(2, 10)).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_update_replaces_fields_keeps_id() {
        let dir = TempDir::new().unwrap();
        let (mut store, heroes) = filled(&dir, 5);
        let target = &heroes[3];
        let draft = HeroDraft::new(
            "Ultra-Man",
            NaiveDate::from_ymd_opt(1939, 11, 1).unwrap(),
            "Gary",
            "Concord",
        );

        assert!(store.update(target.id(), draft.clone()).unwrap());

        let found = store.get(target.id()).unwrap().unwrap();
        assert_eq!(found, draft.into_hero(*target.id()));

        let after = all(&store);
        assert_eq!(after.len(), 5);
        assert_eq!(after[3].id(), target.id());
        for i in [0, 1, 2, 4] {
            assert_eq!(after[i], heroes[i]);
        }
        assert_eq!(store.size(), 5);
    }

    #[test]
    fn test_update_unknown_id_leaves_file_alone() {
        let dir = TempDir::new().unwrap();
        let (mut store, _) = filled(&dir, 20);
        let before = fs::read_to_string(data_path(&dir)).unwrap();

        assert!(!store.update(&HeroId::new_v4(), hero("Doctor Occult").draft()).unwrap());

        assert_eq!(fs::read_to_string(data_path(&dir)).unwrap(), before);
        assert!(!store.temp_path.exists());
    }

    #[test]
    fn test_delete_middle_preserves_order() {
        let dir = TempDir::new().unwrap();
        let (mut store, heroes) = filled(&dir, 3);

        assert!(store.delete(heroes[1].id()).unwrap());

        assert_eq!(
            store.get_page(Page::new(1, 3)).unwrap(),
            vec![heroes[0].clone(), heroes[2].clone()]
        );
        assert_eq!(store.size(), 2);
        assert_eq!(store.get(heroes[1].id()).unwrap(), None);
        assert!(!store.temp_path.exists());
    }

    #[test]
    fn test_delete_unknown_id_keeps_size() {
        let dir = TempDir::new().unwrap();
        let (mut store, heroes) = filled(&dir, 4);

        assert!(!store.delete(&HeroId::new_v4()).unwrap());

        assert_eq!(store.size(), 4);
        assert_eq!(all(&store), heroes);
    }

    #[test]
    fn test_duplicate_ids_only_first_is_touched() {
        let dir = TempDir::new().unwrap();
        let mut store = JsonFileHeroStore::open(data_path(&dir)).unwrap();
        let original = hero("Twin");
        let twin = original.draft().into_hero(*original.id());
        store.register(original.clone()).unwrap();
        store.register(twin).unwrap();

        assert!(store.delete(original.id()).unwrap());

        assert_eq!(store.size(), 1);
        assert_eq!(all(&store), vec![original]);
    }

    #[test]
    fn test_corrupt_line_fails_rewrite_and_keeps_file() {
        let dir = TempDir::new().unwrap();
        let (mut store, heroes) = filled(&dir, 2);
        let mut file = OpenOptions::new().append(true).open(data_path(&dir)).unwrap();
        writeln!(file, "{{not json").unwrap();
        drop(file);
        let before = fs::read_to_string(data_path(&dir)).unwrap();

        let err = store.delete(&HeroId::new_v4()).unwrap_err();

        assert!(matches!(err, StoreError::Corrupt { line: 3, .. }));
        assert_eq!(fs::read_to_string(data_path(&dir)).unwrap(), before);
        assert!(!store.temp_path.exists());
        assert_eq!(store.get(heroes[0].id()).unwrap(), Some(heroes[0].clone()));
    }
}
