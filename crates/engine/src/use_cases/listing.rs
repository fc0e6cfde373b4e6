//! Filtered, paged listings of every collection.

use std::sync::Arc;

use eordb_shared::{EntityRef, ItemListEntry, ListPage, ListQuery};

use crate::infrastructure::ports::StoreError;
use crate::stores::{Collection, DatasetStore, Record};

/// Name shown for maps exported without one.
pub const UNNAMED_MAP: &str = "???";

#[derive(Debug, thiserror::Error)]
pub enum ListError {
    #[error("Invalid page: {0}")]
    InvalidPage(String),
    #[error("Invalid type: {0}")]
    InvalidType(String),
    #[error("Store error: {0}")]
    Store(#[from] StoreError),
}

/// Parsed form of a [`ListQuery`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Criteria {
    /// Lowercased name fragment; empty matches everything
    pub name: String,
    pub type_code: Option<i32>,
    pub page: usize,
}

impl Criteria {
    /// `with_type` is false for collections without a type filter, whose
    /// `type` parameter is ignored.
    pub fn parse(query: &ListQuery, with_type: bool) -> Result<Self, ListError> {
        let page = query
            .page
            .trim()
            .parse::<usize>()
            .ok()
            .filter(|page| *page >= 1)
            .ok_or_else(|| ListError::InvalidPage(query.page.clone()))?;

        let type_code = match query.type_filter.trim() {
            _ if !with_type => None,
            "all" | "" => None,
            code => Some(
                code.parse::<i32>()
                    .map_err(|_| ListError::InvalidType(query.type_filter.clone()))?,
            ),
        };

        Ok(Self {
            name: query.name.trim().to_lowercase(),
            type_code,
            page,
        })
    }

    pub fn matches(&self, name: &str, type_code: i32) -> bool {
        (self.name.is_empty() || name.to_lowercase().contains(&self.name))
            && self.type_code.map_or(true, |code| code == type_code)
    }
}

/// Cuts one page out of an already filtered list. Pages past the end are
/// empty.
pub fn paginate<T>(filtered: Vec<T>, page: usize, page_size: usize) -> ListPage<T> {
    let count = filtered.len();
    let start = page_size.saturating_mul(page.saturating_sub(1));
    let records = filtered.into_iter().skip(start).take(page_size).collect();
    ListPage {
        count,
        page,
        page_size,
        records,
    }
}

pub struct Listing {
    store: Arc<DatasetStore>,
    page_size: usize,
}

impl Listing {
    pub fn new(store: Arc<DatasetStore>, page_size: usize) -> Self {
        Self { store, page_size }
    }

    /// Items by name and `item_type`, with summary lines for the page.
    pub async fn items(&self, query: &ListQuery) -> Result<ListPage<ItemListEntry>, ListError> {
        let criteria = Criteria::parse(query, true)?;
        let items = self.store.items().await?;
        let page = self.page_of(&items, &criteria, |i| (&i.name, i.item_type));
        Ok(map_records(page, |item| ItemListEntry {
            id: item.id.get(),
            name: item.name.clone(),
            meta: item.meta_lines(),
        }))
    }

    /// NPCs by name and `behavior`.
    pub async fn npcs(&self, query: &ListQuery) -> Result<ListPage<EntityRef>, ListError> {
        let criteria = Criteria::parse(query, true)?;
        let npcs = self.store.npcs().await?;
        let page = self.page_of(&npcs, &criteria, |n| (&n.name, n.behavior));
        Ok(map_records(page, |npc| entity(npc.id.get(), &npc.name)))
    }

    /// Spells by name and `spell_type`.
    pub async fn spells(&self, query: &ListQuery) -> Result<ListPage<EntityRef>, ListError> {
        let criteria = Criteria::parse(query, true)?;
        let spells = self.store.spells().await?;
        let page = self.page_of(&spells, &criteria, |s| (&s.name, s.spell_type));
        Ok(map_records(page, |spell| entity(spell.id.get(), &spell.name)))
    }

    pub async fn maps(&self, query: &ListQuery) -> Result<ListPage<EntityRef>, ListError> {
        let criteria = Criteria::parse(query, false)?;
        let maps = self.store.maps().await?;
        let page = self.page_of(&maps, &criteria, |m| (&m.name, 0));
        Ok(map_records(page, |map| {
            let name = if map.name.is_empty() {
                UNNAMED_MAP
            } else {
                &map.name
            };
            entity(map.id.get(), name)
        }))
    }

    /// Quests by title.
    pub async fn quests(&self, query: &ListQuery) -> Result<ListPage<EntityRef>, ListError> {
        let criteria = Criteria::parse(query, false)?;
        let quests = self.store.quests().await?;
        let page = self.page_of(&quests, &criteria, |q| (&q.title, 0));
        Ok(map_records(page, |quest| entity(quest.id.get(), &quest.title)))
    }

    pub async fn classes(&self, query: &ListQuery) -> Result<ListPage<EntityRef>, ListError> {
        let criteria = Criteria::parse(query, false)?;
        let classes = self.store.classes().await?;
        let page = self.page_of(&classes, &criteria, |c| (&c.name, 0));
        Ok(map_records(page, |class| entity(class.id.get(), &class.name)))
    }

    fn page_of<'a, T: Record>(
        &self,
        collection: &'a Collection<T>,
        criteria: &Criteria,
        fields: impl Fn(&T) -> (&String, i32),
    ) -> ListPage<&'a T> {
        let filtered = collection
            .all()
            .iter()
            .filter(|record| {
                let (name, type_code) = fields(record);
                criteria.matches(name, type_code)
            })
            .collect();
        paginate(filtered, criteria.page, self.page_size)
    }
}

fn entity(id: u32, name: &str) -> EntityRef {
    EntityRef {
        id,
        name: name.to_string(),
    }
}

fn map_records<T, U>(page: ListPage<T>, f: impl FnMut(T) -> U) -> ListPage<U> {
    ListPage {
        count: page.count,
        page: page.page,
        page_size: page.page_size,
        records: page.records.into_iter().map(f).collect(),
    }
}
