use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

/// Номер места: буква ряда плюс номер кресла ("A1" .. "E10").
/// Порядок - по ряду, затем по номеру кресла, поэтому "A2" идёт
/// раньше "A10".
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SeatId {
    pub row: char,
    pub column: u8,
}

impl SeatId {
    pub const fn new(row: char, column: u8) -> Self {
        Self { row, column }
    }
}

impl fmt::Display for SeatId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.row, self.column)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid seat number: {0:?}")]
pub struct ParseSeatIdError(pub String);

impl FromStr for SeatId {
    type Err = ParseSeatIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        let row = chars
            .next()
            .filter(char::is_ascii_uppercase)
            .ok_or_else(|| ParseSeatIdError(s.to_string()))?;
        let column = chars
            .as_str()
            .parse::<u8>()
            .ok()
            .filter(|&c| c > 0)
            .ok_or_else(|| ParseSeatIdError(s.to_string()))?;
        Ok(SeatId { row, column })
    }
}

// На проводе место - обычная строка "A1"
impl Serialize for SeatId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for SeatId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        text.parse().map_err(de::Error::custom)
    }
}

/// Запись занятости одного места, как её отдаёт сервис.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeatOccupancy {
    pub seat_number: String,
    pub is_booked: bool,
}

/// Снимок занятости зала на момент загрузки: множество выкупленных
/// мест. Место, которого в снимке нет, считается свободным.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OccupancySnapshot {
    booked: BTreeSet<SeatId>,
}

impl OccupancySnapshot {
    /// Разбирает ответ сервиса. Любой нечитаемый номер места - ошибка
    /// всего снимка, а не молча пропущенная запись.
    pub fn from_records(records: &[SeatOccupancy]) -> Result<Self, ParseSeatIdError> {
        let mut booked = BTreeSet::new();
        for record in records {
            let seat: SeatId = record.seat_number.parse()?;
            if record.is_booked {
                booked.insert(seat);
            }
        }
        Ok(Self { booked })
    }

    pub fn is_booked(&self, seat: SeatId) -> bool {
        self.booked.contains(&seat)
    }

    pub fn booked_count(&self) -> usize {
        self.booked.len()
    }
}
