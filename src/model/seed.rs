use crate::model::item::{Direction, Item, ResetPeriod};

/// The default set of items a fresh session starts with. Also serves as
/// the canonical fixture for tests.
pub fn seed_items() -> Vec<Item> {
    vec![
        seed(1, "Sübhanallah", "سُبْحَانَ ٱللَّٰهِ", "Glory be to Allah", 33, 3),
        seed(2, "Elhamdülillah", "ٱلْحَمْدُ لِلَّٰهِ", "All praise is due to Allah", 33, 3),
        seed(3, "Allahu Ekber", "اللّٰهُ أَكْبَرُ", "Allah is the greatest", 33, 3),
        seed(
            4,
            "La ilahe illallah",
            "لَا إِلَٰهَ إِلَّا ٱللَّٰهُ",
            "There is no god but Allah",
            100,
            5,
        ),
    ]
}

fn seed(id: u64, title: &str, display_text: &str, meaning: &str, target: i64, threshold: i64) -> Item {
    Item {
        id,
        title: title.to_string(),
        display_text: display_text.to_string(),
        meaning: meaning.to_string(),
        target: Some(target),
        start_value: 0,
        direction: Direction::Up,
        vibrate_near_end: true,
        sound_on_complete: true,
        reset_period: ResetPeriod::Daily,
        vibrate_threshold: Some(threshold),
        last_reset: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seed_shape() {
        let items = seed_items();
        assert_eq!(items.len(), 4);
        assert_eq!(
            items.iter().map(|i| i.id).collect::<Vec<_>>(),
            vec![1, 2, 3, 4]
        );
        assert_eq!(
            items.iter().map(|i| i.target).collect::<Vec<_>>(),
            vec![Some(33), Some(33), Some(33), Some(100)]
        );
        assert_eq!(
            items.iter().map(|i| i.vibrate_threshold).collect::<Vec<_>>(),
            vec![Some(3), Some(3), Some(3), Some(5)]
        );
        assert!(items.iter().all(|i| i.direction == Direction::Up));
        assert!(items.iter().all(|i| i.reset_period == ResetPeriod::Daily));
        assert!(items.iter().all(|i| i.last_reset.is_none()));
    }
}
