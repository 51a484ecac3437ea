//! запись таблиц в data/: литералы структур, которые toolkit подключает через include!

use std::fs;
use std::path::{Path, PathBuf};

use log::debug;

use crate::encode::{inversion_list, EncodedTrie};
use crate::ucd::UcdError;

pub mod format;

/// каталог с таблицами и список записанных файлов
#[derive(Debug)]
pub struct Output
{
    root: PathBuf,
    written: Vec<(PathBuf, usize)>,
}

impl Output
{
    pub fn new(root: impl Into<PathBuf>) -> Self
    {
        Self {
            root: root.into(),
            written: vec![],
        }
    }

    pub fn root(&self) -> &Path
    {
        &self.root
    }

    /// файл относительно корня, каталоги создаются при необходимости
    pub fn write(&mut self, name: &str, text: &str) -> Result<(), UcdError>
    {
        let path = self.root.join(name);

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|source| UcdError::Io {
                path: parent.to_owned(),
                source,
            })?;
        }

        fs::write(&path, text).map_err(|source| UcdError::Io {
            path: path.clone(),
            source,
        })?;

        debug!("{}: {} байт", path.display(), text.len());
        self.written.push((path, text.len()));

        Ok(())
    }

    /// props/maps/<name>.txt
    pub fn map(&mut self, name: &str, trie: &EncodedTrie) -> Result<(), UcdError>
    {
        self.write(&format!("props/maps/{}.txt", name), &(format::trie(trie) + "\n"))
    }

    /// props/sets/<name>.txt
    pub fn set(&mut self, name: &str, flags: &[bool]) -> Result<(), UcdError>
    {
        self.write(
            &format!("props/sets/{}.txt", name),
            &format::inversion_list(&inversion_list(flags)),
        )
    }

    /// записанные файлы и их размеры
    pub fn written(&self) -> &[(PathBuf, usize)]
    {
        &self.written
    }
}
