use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Pos {
    pub y: i32,
    pub x: i32,
}

impl Pos {
    /// The four axis neighbors in fixed north, east, south, west order.
    pub fn axis_neighbors(self) -> [Pos; 4] {
        [
            Pos { y: self.y - 1, x: self.x },
            Pos { y: self.y, x: self.x + 1 },
            Pos { y: self.y + 1, x: self.x },
            Pos { y: self.y, x: self.x - 1 },
        ]
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum TileKind {
    Wall,
    Floor,
}

impl TileKind {
    pub fn opposite(self) -> Self {
        match self {
            Self::Wall => Self::Floor,
            Self::Floor => Self::Wall,
        }
    }
}

pub fn squared_distance(a: Pos, b: Pos) -> i64 {
    let dx = i64::from(a.x - b.x);
    let dy = i64::from(a.y - b.y);
    dx * dx + dy * dy
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn axis_neighbors_keep_north_east_south_west_order() {
        let center = Pos { y: 4, x: 7 };
        assert_eq!(
            center.axis_neighbors(),
            [
                Pos { y: 3, x: 7 },
                Pos { y: 4, x: 8 },
                Pos { y: 5, x: 7 },
                Pos { y: 4, x: 6 },
            ]
        );
    }

    #[test]
    fn squared_distance_never_takes_a_root() {
        let a = Pos { y: 0, x: 0 };
        let b = Pos { y: 2, x: 3 };
        assert_eq!(squared_distance(a, b), 13);
        assert_eq!(squared_distance(b, a), 13);
        assert_eq!(squared_distance(a, a), 0);
    }
}
