//! Render-oriented tables of standings.
//!
//! A [`Table`] is a list of column keys and one row of typed values per team. Front-ends only
//! need to print it; all ordering is done by [`GroupStandings`] and [`ThirdPlaceRanking`].
use std::borrow::Cow;
use std::fmt::{self, Display, Formatter};
use std::iter::FusedIterator;

use crate::standings::TeamRecord;
use crate::third_place::{ThirdPlaceRanking, QUALIFIERS};
use crate::tiebreak::GroupStandings;
use crate::TeamId;

/// The columns of every table, in order.
pub const RECORD_KEYS: [&str; 9] = ["Pos", "P", "W", "D", "L", "GF", "GA", "GD", "Pts"];

#[derive(Clone, Debug)]
pub struct Table {
    keys: Vec<Cow<'static, str>>,
    rows: Vec<Row>,
}

impl Table {
    #[inline]
    pub fn builder() -> Builder {
        Builder::new()
    }

    /// Builds the table of a single group. Rows of an unresolved tie are marked.
    pub fn group(standings: &GroupStandings) -> Self {
        let mut builder = Self::builder();
        builder.keys(RECORD_KEYS);

        for entry in standings.entries.iter() {
            let tied = standings.ties().iter().any(|tie| tie.covers(entry.position));

            builder.row(entry.team, |row| {
                row.value(entry.position as u64).record(&entry.record);
                row.tied = tied;
                row.highlight = standings.is_settled(entry.position) && entry.position <= 2;
            });
        }

        builder.build()
    }

    /// Builds the table of all third-placed teams with an additional group column. The rows
    /// of the qualified teams are highlighted.
    pub fn third_places(ranking: &ThirdPlaceRanking) -> Self {
        let mut builder = Self::builder();
        builder.key("Group").keys(RECORD_KEYS);

        for (index, entry) in ranking.ranked.iter().enumerate() {
            builder.row(entry.team, |row| {
                row.value(entry.group.to_string())
                    .value(index as u64 + 1)
                    .record(&entry.record);
                row.highlight = index < QUALIFIERS;
                // Only the teams around the cut-off can be affected.
                row.tied = ranking.cutoff_tie
                    && entry.record.key() == ranking.ranked[QUALIFIERS - 1].record.key();
            });
        }

        builder.build()
    }

    #[inline]
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            inner: self,
            next: 0,
        }
    }

    #[inline]
    pub fn keys(&self) -> Keys<'_> {
        Keys {
            inner: self,
            next: 0,
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

#[derive(Clone, Debug, Default)]
pub struct Builder {
    keys: Vec<Cow<'static, str>>,
    rows: Vec<Row>,
}

impl Builder {
    #[inline]
    pub const fn new() -> Self {
        Self {
            keys: Vec::new(),
            rows: Vec::new(),
        }
    }

    #[inline]
    pub fn key<K>(&mut self, key: K) -> &mut Self
    where
        K: Into<Cow<'static, str>>,
    {
        self.keys.push(key.into());
        self
    }

    pub fn keys<I>(&mut self, keys: I) -> &mut Self
    where
        I: IntoIterator,
        I::Item: Into<Cow<'static, str>>,
    {
        self.keys.extend(keys.into_iter().map(Into::into));
        self
    }

    pub fn row<F>(&mut self, team: TeamId, f: F) -> &mut Self
    where
        F: FnOnce(&mut RowBuilder),
    {
        let mut builder = RowBuilder::new(team);
        f(&mut builder);
        self.rows.push(builder.build());
        self
    }

    #[inline]
    pub fn build(self) -> Table {
        Table {
            keys: self.keys,
            rows: self.rows,
        }
    }
}

#[derive(Clone, Debug)]
pub struct RowBuilder {
    team: TeamId,
    values: Vec<EntryValue>,
    pub highlight: bool,
    pub tied: bool,
}

impl RowBuilder {
    #[inline]
    const fn new(team: TeamId) -> Self {
        Self {
            team,
            values: Vec::new(),
            highlight: false,
            tied: false,
        }
    }

    #[inline]
    pub fn value<V>(&mut self, value: V) -> &mut Self
    where
        V: Into<EntryValue>,
    {
        self.values.push(value.into());
        self
    }

    /// Appends the columns `P` to `Pts` of [`RECORD_KEYS`].
    pub fn record(&mut self, record: &TeamRecord) -> &mut Self {
        self.value(u64::from(record.played))
            .value(u64::from(record.won))
            .value(u64::from(record.drawn))
            .value(u64::from(record.lost))
            .value(record.goals_for)
            .value(record.goals_against)
            .value(record.goal_difference)
            .value(u64::from(record.points))
    }

    #[inline]
    fn build(self) -> Row {
        Row {
            team: self.team,
            values: self.values,
            highlight: self.highlight,
            tied: self.tied,
        }
    }
}

#[derive(Clone, Debug)]
pub struct Iter<'a> {
    inner: &'a Table,
    next: usize,
}

impl<'a> Iterator for Iter<'a> {
    type Item = &'a Row;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let row = self.inner.rows.get(self.next)?;
        self.next += 1;
        Some(row)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.len(), Some(self.len()))
    }
}

impl<'a> ExactSizeIterator for Iter<'a> {
    #[inline]
    fn len(&self) -> usize {
        self.inner.rows.len() - self.next
    }
}

impl<'a> FusedIterator for Iter<'a> {}

#[derive(Clone, Debug)]
pub struct Keys<'a> {
    inner: &'a Table,
    next: usize,
}

impl<'a> Iterator for Keys<'a> {
    type Item = &'a str;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let key = self.inner.keys.get(self.next)?;
        self.next += 1;
        Some(key)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.len(), Some(self.len()))
    }
}

impl<'a> ExactSizeIterator for Keys<'a> {
    #[inline]
    fn len(&self) -> usize {
        self.inner.keys.len() - self.next
    }
}

impl<'a> FusedIterator for Keys<'a> {}

/// A single row of a [`Table`].
#[derive(Clone, Debug, PartialEq)]
pub struct Row {
    pub team: TeamId,
    pub values: Vec<EntryValue>,
    /// The team advances (group top 2, or one of the best third places).
    pub highlight: bool,
    /// The team is part of a tie that is not decided yet.
    pub tied: bool,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum EntryValue {
    I64(i64),
    U64(u64),
    Str(Cow<'static, str>),
}

impl Display for EntryValue {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            // Goal difference is shown with an explicit sign.
            Self::I64(val) if *val > 0 => write!(f, "+{}", val),
            Self::I64(val) => Display::fmt(val, f),
            Self::U64(val) => Display::fmt(val, f),
            Self::Str(val) => Display::fmt(val, f),
        }
    }
}

impl From<i64> for EntryValue {
    #[inline]
    fn from(value: i64) -> Self {
        Self::I64(value)
    }
}

impl From<u64> for EntryValue {
    #[inline]
    fn from(value: u64) -> Self {
        Self::U64(value)
    }
}

impl From<&'static str> for EntryValue {
    #[inline]
    fn from(value: &'static str) -> Self {
        Self::Str(Cow::Borrowed(value))
    }
}

impl From<String> for EntryValue {
    #[inline]
    fn from(value: String) -> Self {
        Self::Str(value.into())
    }
}
