//! Owning set of MAC addresses with optional per-host state.

use crate::error::{Result, StoreError};
use crate::host::MacKeyed;
use ndwatch_types::MacAddress;
use std::fmt;
use tracing::{info, trace};

#[cfg(feature = "perf-fxhash")]
type Table<R> = rustc_hash::FxHashMap<MacAddress, Entry<R>>;
#[cfg(not(feature = "perf-fxhash"))]
type Table<R> = std::collections::HashMap<MacAddress, Entry<R>>;

/// Number of entries a set created with a zero capacity hint is sized for.
pub const DEFAULT_EXPECTED_HOSTS: usize = 20;

/// Value slot of one [`MacSet`] entry.
#[derive(Debug)]
pub enum Entry<R> {
    /// The MAC has been observed; no host state is tracked.
    Marker,
    /// Host state exclusively owned by the set.
    Record(Box<R>),
}

impl<R> Entry<R> {
    /// Returns the attached record, if any.
    pub fn record(&self) -> Option<&R> {
        match self {
            Entry::Marker => None,
            Entry::Record(record) => Some(record),
        }
    }

    /// Returns true for bare membership markers.
    pub fn is_marker(&self) -> bool {
        matches!(self, Entry::Marker)
    }

    fn record_mut(&mut self) -> Option<&mut R> {
        match self {
            Entry::Marker => None,
            Entry::Record(record) => Some(record),
        }
    }
}

/// An owning association store keyed by MAC address.
///
/// Each key maps to exactly one [`Entry`]: a bare [`Entry::Marker`] or a
/// set-owned [`Entry::Record`]. Records accepted by the set are released
/// when their entry is replaced or removed, and when the set itself is
/// dropped.
///
/// # Examples
///
/// ```
/// use ndwatch_store::{HostRecord, MacSet};
/// use ndwatch_types::MacAddress;
///
/// let mut seen: MacSet<HostRecord> = MacSet::with_capacity(0)?;
/// seen.add_text("00:11:22:33:44:55")?;
/// assert_eq!(seen.count(), 1);
/// assert!(seen.contains("00:11:22:33:44:55".parse::<MacAddress>().unwrap()));
/// # Ok::<(), ndwatch_store::StoreError>(())
/// ```
#[derive(Debug)]
pub struct MacSet<R> {
    entries: Table<R>,
}

impl<R> MacSet<R> {
    /// Creates a set sized for `expected` entries.
    ///
    /// The hint is not a hard limit; the table grows as needed. A hint of
    /// zero selects the default of [`DEFAULT_EXPECTED_HOSTS`].
    pub fn with_capacity(expected: usize) -> Result<Self> {
        let expected = if expected == 0 {
            DEFAULT_EXPECTED_HOSTS
        } else {
            expected
        };
        let mut entries = Table::default();
        entries.try_reserve(expected)?;
        Ok(MacSet { entries })
    }

    /// Inserts `mac` as a bare membership marker.
    ///
    /// Inserting over an existing entry replaces it, releasing any
    /// superseded record.
    pub fn add(&mut self, mac: MacAddress) -> Result<()> {
        self.insert(mac, Entry::Marker)
    }

    /// Parses `text` as a MAC address and inserts it as a marker.
    ///
    /// The text is validated; use
    /// [`MacAddress::parse_unchecked`] plus [`add`](Self::add) on trusted
    /// hot paths.
    pub fn add_text(&mut self, text: &str) -> Result<()> {
        let mac = text.parse::<MacAddress>()?;
        self.add(mac)
    }

    /// Attaches `record` under `mac`, taking exclusive ownership of it.
    ///
    /// The record is released by a later replacement or removal of the
    /// entry, or when the set is dropped. Same replacement semantics as
    /// [`add`](Self::add).
    pub fn add_record(&mut self, mac: MacAddress, record: Box<R>) -> Result<()> {
        self.insert(mac, Entry::Record(record))
    }

    fn insert(&mut self, mac: MacAddress, entry: Entry<R>) -> Result<()> {
        self.entries.try_reserve(1)?;
        // Replacement drops the superseded entry, releasing its record.
        self.entries.insert(mac, entry);
        Ok(())
    }

    /// Removes the entry for `mac`, releasing any attached record.
    ///
    /// An absent key is reported as [`StoreError::NotFound`], a normal
    /// outcome the caller may ignore.
    pub fn remove(&mut self, mac: MacAddress) -> Result<()> {
        match self.entries.remove(&mac) {
            Some(_) => Ok(()),
            None => Err(StoreError::NotFound(mac)),
        }
    }

    /// Releases every entry, leaving the set empty but usable.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Returns true if an entry exists for `mac`, marker or record alike.
    pub fn contains(&self, mac: MacAddress) -> bool {
        self.entries.contains_key(&mac)
    }

    /// Returns the record attached to `mac`, if any.
    ///
    /// Returns `None` both for unknown keys and for keys holding a bare
    /// marker; callers needing to tell the two apart use
    /// [`contains`](Self::contains) or [`entry`](Self::entry).
    pub fn get(&self, mac: MacAddress) -> Option<&R> {
        self.entries.get(&mac).and_then(Entry::record)
    }

    /// Mutable access to the record attached to `mac`, if any.
    pub fn get_mut(&mut self, mac: MacAddress) -> Option<&mut R> {
        self.entries.get_mut(&mac).and_then(Entry::record_mut)
    }

    /// Returns the full entry for `mac`, distinguishing marker from record.
    pub fn entry(&self, mac: MacAddress) -> Option<&Entry<R>> {
        self.entries.get(&mac)
    }

    /// Number of live entries, markers and records both counted.
    pub fn count(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the set holds no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates over every live entry exactly once, in bucket order.
    ///
    /// Each iterator owns its own position, so any number of traversals may
    /// be live at once; mutating the set while one exists is rejected at
    /// compile time.
    pub fn iter(&self) -> Iter<'_, R> {
        Iter {
            inner: self.entries.iter(),
        }
    }

    /// Iterates over the MAC keys only, in bucket order.
    pub fn macs(&self) -> impl Iterator<Item = MacAddress> + '_ {
        self.entries.keys().copied()
    }

    /// Writes a human-readable listing of the set to `out`: one title line
    /// with the entry count, then one canonical colon-hex MAC per line.
    pub fn write_report<W: fmt::Write>(&self, title: &str, out: &mut W) -> fmt::Result {
        writeln!(out, "MAC set '{}' with {} entries:", title, self.count())?;
        for mac in self.macs() {
            writeln!(out, "{mac}")?;
        }
        Ok(())
    }

    /// Emits the same listing as [`write_report`](Self::write_report)
    /// through the tracing subscriber, one line per entry.
    pub fn log_report(&self, title: &str) {
        info!("MAC set '{}' with {} entries:", title, self.count());
        for mac in self.macs() {
            info!("{mac}");
        }
    }
}

impl<R: MacKeyed + Clone> MacSet<R> {
    /// Copies `payload` into a fresh set-owned record, keyed by the MAC
    /// the payload itself carries.
    ///
    /// An absent payload is [`StoreError::MissingPayload`]; on any failure
    /// nothing is inserted.
    pub fn add_host(&mut self, payload: Option<&R>) -> Result<()> {
        let payload = payload.ok_or(StoreError::MissingPayload)?;
        let record = Box::new(payload.clone());
        trace!(mac = %record.key(), "allocated host record");
        self.add_record(record.key(), record)
    }
}

impl<R> Default for MacSet<R> {
    /// An empty set with no preallocated capacity.
    fn default() -> Self {
        MacSet {
            entries: Table::default(),
        }
    }
}

/// Borrowing iterator over the entries of a [`MacSet`].
pub struct Iter<'a, R> {
    inner: std::collections::hash_map::Iter<'a, MacAddress, Entry<R>>,
}

impl<'a, R> Iterator for Iter<'a, R> {
    type Item = (&'a MacAddress, &'a Entry<R>);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<R> ExactSizeIterator for Iter<'_, R> {
    fn len(&self) -> usize {
        self.inner.len()
    }
}

impl<'a, R> IntoIterator for &'a MacSet<R> {
    type Item = (&'a MacAddress, &'a Entry<R>);
    type IntoIter = Iter<'a, R>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
