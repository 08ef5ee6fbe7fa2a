use crate::error::Result;
use crate::model::{Athlete, Attribute, AttributeTable};

/// Sprint, Hilly, Mountain, CurrentForm, Injury.
const RIDERS: &[(&str, [f64; 5])] = &[
    ("Lorena Wiebes", [9.5, 5.5, 2.5, 8.5, 0.0]),
    ("Marianne Vos", [8.5, 7.5, 4.0, 9.0, 0.0]),
    ("Kasia Niewiadoma", [5.0, 8.5, 9.0, 9.0, 0.0]),
    ("Demi Vollering", [4.5, 8.0, 9.5, 6.5, 1.0]),
    ("Pauline Ferrand-Prevot", [6.0, 7.5, 8.0, 8.5, 0.0]),
    ("Mavi Garcia", [4.0, 6.5, 7.5, 7.5, 0.0]),
    ("Emilie Morier", [7.0, 7.5, 6.0, 8.0, 0.0]),
];

pub fn builtin_roster() -> Result<AttributeTable> {
    let athletes = RIDERS
        .iter()
        .map(|(name, ratings)| {
            let pairs = Attribute::ALL
                .iter()
                .copied()
                .zip(ratings.iter().copied())
                .collect::<Vec<_>>();
            Athlete::new(*name, &pairs)
        })
        .collect();
    AttributeTable::new(athletes)
}
