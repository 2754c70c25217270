use std::collections::HashMap;

/// упорядоченное множество имён: идентификатор - порядковый номер первого появления
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OrderedSet
{
    names: Vec<String>,
    index: HashMap<String, usize>,
}

impl OrderedSet
{
    pub fn new() -> Self
    {
        Self::default()
    }

    /// добавить имя, если его ещё нет; идентификатор имени
    pub fn insert(&mut self, name: impl AsRef<str>) -> usize
    {
        let name = name.as_ref();

        if let Some(&id) = self.index.get(name) {
            return id;
        }

        let id = self.names.len();
        self.names.push(name.to_string());
        self.index.insert(name.to_string(), id);

        id
    }

    #[cfg(test)]
    pub fn get(&self, name: impl AsRef<str>) -> Option<usize>
    {
        self.index.get(name.as_ref()).copied()
    }

    #[cfg(test)]
    pub fn len(&self) -> usize
    {
        self.names.len()
    }

    #[cfg(test)]
    pub fn names(&self) -> &[String]
    {
        &self.names
    }

    pub fn into_names(self) -> Vec<String>
    {
        self.names
    }
}
