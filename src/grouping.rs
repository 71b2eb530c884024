use std::collections::BTreeMap;

use chrono::NaiveDate;

use crate::display;
use crate::models::Showtime;

/// Двухуровневая группировка сеансов для афиши: календарный день ->
/// экран -> сеансы. Производное одноразовое представление, строится
/// заново на каждую отрисовку и нигде не сохраняется.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ShowtimeGroups {
    groups: BTreeMap<NaiveDate, BTreeMap<String, Vec<Showtime>>>,
}

/// Группирует плоский список сеансов. Ключ группировки - календарный
/// день, время начала на ключ не влияет. Внутри группы сеансы остаются
/// в исходном порядке: список приходит уже отсортированным по времени,
/// и пересортировки здесь нет.
pub fn group_showtimes(showtimes: &[Showtime]) -> ShowtimeGroups {
    let mut groups: BTreeMap<NaiveDate, BTreeMap<String, Vec<Showtime>>> = BTreeMap::new();
    for showtime in showtimes {
        groups
            .entry(showtime.show_date)
            .or_default()
            .entry(showtime.screen_name.clone())
            .or_default()
            .push(showtime.clone());
    }
    ShowtimeGroups { groups }
}

impl ShowtimeGroups {
    /// Пустая группировка - афиша показывает "no showtimes available".
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Количество дней в афише.
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    /// Дни в хронологическом порядке вместе с готовой подписью;
    /// экраны внутри дня идут по алфавиту.
    pub fn iter(
        &self,
    ) -> impl Iterator<Item = (String, &BTreeMap<String, Vec<Showtime>>)> + '_ {
        self.groups
            .iter()
            .map(|(date, screens)| (display::short_date(*date), screens))
    }
}
