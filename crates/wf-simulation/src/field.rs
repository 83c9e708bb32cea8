use crate::weed::{Rgb, Weed, WeedId};

/// The append-only collection of every weed spawned in a run, together with
/// the id counter.
///
/// Weeds are never removed, including those that have drifted past the field
/// edge, so memory grows with the number of ticks for as long as the run
/// lasts.
#[derive(Debug, Clone)]
pub struct WeedField {
    weeds: Vec<Weed>,
    next_id: u64,
}

impl Default for WeedField {
    fn default() -> Self {
        Self::new()
    }
}

impl WeedField {
    /// Create an empty field whose first weed will get id 1.
    pub fn new() -> Self {
        Self {
            weeds: Vec::new(),
            next_id: 1,
        }
    }

    /// Create a weed at `x = 0`, `y = y0` with the next id and append it.
    pub fn spawn(&mut self, y0: f64, speed: f64, angle: f64, color: Option<Rgb>) -> WeedId {
        let id = WeedId(self.next_id);
        self.next_id += 1;
        self.weeds.push(Weed::new(id, y0, speed, angle, color));
        id
    }

    /// Look up a weed by id.
    pub fn get(&self, id: WeedId) -> Option<&Weed> {
        // Ids are dense and start at 1, so the id doubles as an index.
        let index = usize::try_from(id.0.checked_sub(1)?).ok()?;
        self.weeds.get(index)
    }

    /// Iterate over all weeds in spawn (and therefore id) order.
    pub fn iter(&self) -> std::slice::Iter<'_, Weed> {
        self.weeds.iter()
    }

    pub(crate) fn iter_mut(&mut self) -> std::slice::IterMut<'_, Weed> {
        self.weeds.iter_mut()
    }

    /// All weeds as a slice, in id order.
    pub fn as_slice(&self) -> &[Weed] {
        &self.weeds
    }

    /// The id the next spawned weed will receive.
    pub fn next_id(&self) -> WeedId {
        WeedId(self.next_id)
    }

    /// Number of weeds spawned so far.
    pub fn len(&self) -> usize {
        self.weeds.len()
    }

    /// Return `true` if nothing has spawned yet.
    pub fn is_empty(&self) -> bool {
        self.weeds.is_empty()
    }

    /// Count weeds whose position lies inside `[0, width) x [0, height)`.
    pub fn count_within(&self, width: f64, height: f64) -> usize {
        self.weeds
            .iter()
            .filter(|w| {
                let p = w.position();
                (0.0..width).contains(&p.x) && (0.0..height).contains(&p.y)
            })
            .count()
    }
}

impl<'a> IntoIterator for &'a WeedField {
    type Item = &'a Weed;
    type IntoIter = std::slice::Iter<'a, Weed>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn ids_start_at_one() {
        let mut field = WeedField::new();
        assert_eq!(field.next_id(), WeedId(1));
        let id = field.spawn(1.0, 0.2, 10.0, None);
        assert_eq!(id, WeedId(1));
        assert_eq!(field.next_id(), WeedId(2));
    }

    #[test]
    fn get_by_id() {
        let mut field = WeedField::new();
        field.spawn(1.0, 0.2, 10.0, None);
        field.spawn(2.0, 0.2, 10.0, Some(Rgb(1, 2, 3)));
        let w = field.get(WeedId(2)).unwrap();
        assert_eq!(w.position().y, 2.0);
        assert_eq!(w.color(), Some(Rgb(1, 2, 3)));
        assert!(field.get(WeedId(0)).is_none());
        assert!(field.get(WeedId(3)).is_none());
    }

    #[test]
    fn count_within_excludes_outside_weeds() {
        let mut field = WeedField::new();
        field.spawn(1.0, 0.2, 10.0, None);
        field.spawn(-0.5, 0.2, 10.0, None);
        field.spawn(5.0, 0.2, 10.0, None);
        assert_eq!(field.count_within(5.0, 5.0), 1);
    }

    proptest! {
        #[test]
        fn spawned_ids_are_dense_and_increasing(ys in proptest::collection::vec(0.0f64..5.0, 0..64)) {
            let mut field = WeedField::new();
            for y in &ys {
                field.spawn(*y, 0.2, 10.0, None);
            }
            prop_assert_eq!(field.len(), ys.len());
            for (i, weed) in field.iter().enumerate() {
                prop_assert_eq!(weed.id(), WeedId(i as u64 + 1));
                prop_assert_eq!(weed.position().x, 0.0);
            }
        }
    }
}
