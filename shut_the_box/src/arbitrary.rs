use crate::{Roll, Strategy, TileSet};

/// A roll total, i.e. a value between 2 and 12.
#[derive(Clone, Copy, Debug)]
pub struct Total(pub u8);

impl quickcheck::Arbitrary for Total {
    fn arbitrary(g: &mut quickcheck::Gen) -> Self {
        Total(2 + u8::arbitrary(g) % 11)
    }
}

impl quickcheck::Arbitrary for TileSet {
    fn arbitrary(g: &mut quickcheck::Gen) -> Self {
        TileSet::from_iter((1..=9).filter(|_| bool::arbitrary(g)))
    }

    fn shrink(&self) -> Box<dyn Iterator<Item = Self>> {
        let set = *self;
        Box::new(set.into_iter().map(move |tile| set.remove(tile)))
    }
}

impl quickcheck::Arbitrary for Roll {
    fn arbitrary(g: &mut quickcheck::Gen) -> Self {
        let faces = [1, 2, 3, 4, 5, 6];
        Roll::new(*g.choose(&faces).unwrap(), *g.choose(&faces).unwrap()).unwrap()
    }
}

impl quickcheck::Arbitrary for Strategy {
    fn arbitrary(g: &mut quickcheck::Gen) -> Self {
        *g.choose(&Strategy::ALL).unwrap()
    }
}
