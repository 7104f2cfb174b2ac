//! Draggable instruments floating over the scene.

pub const CARD_WIDTH: u16 = 28;
pub const CARD_HEIGHT: u16 = 7;
const BASE_Z: u32 = 50;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InstrumentKind {
    Temperature,
    Wind,
    Astronomy,
    Atmosphere,
    AirQuality,
    Location,
}

impl InstrumentKind {
    pub const ALL: [Self; 6] = [
        Self::Temperature,
        Self::Wind,
        Self::Astronomy,
        Self::Atmosphere,
        Self::AirQuality,
        Self::Location,
    ];

    #[must_use]
    pub fn title(self) -> &'static str {
        match self {
            Self::Temperature => "Temperature",
            Self::Wind => "Wind",
            Self::Astronomy => "Astronomy",
            Self::Atmosphere => "Atmosphere",
            Self::AirQuality => "Air quality",
            Self::Location => "Location",
        }
    }

    /// Menu shortcut, `1`..=`6`.
    #[must_use]
    pub fn from_digit(digit: char) -> Option<Self> {
        let idx = digit.to_digit(10)?.checked_sub(1)?;
        Self::ALL.get(usize::try_from(idx).ok()?).copied()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Instrument {
    pub id: u64,
    pub kind: InstrumentKind,
    pub x: i32,
    pub y: i32,
    pub z: u32,
}

impl Instrument {
    #[must_use]
    pub fn contains(&self, col: i32, row: i32) -> bool {
        col >= self.x
            && col < self.x + i32::from(CARD_WIDTH)
            && row >= self.y
            && row < self.y + i32::from(CARD_HEIGHT)
    }

    /// The `x` glyph in the top border.
    #[must_use]
    pub fn close_hit(&self, col: i32, row: i32) -> bool {
        row == self.y && col == self.x + i32::from(CARD_WIDTH) - 3
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Drag {
    id: u64,
    grab_dx: i32,
    grab_dy: i32,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InstrumentBoard {
    items: Vec<Instrument>,
    next_id: u64,
    drag: Option<Drag>,
}

impl InstrumentBoard {
    #[must_use]
    pub fn items(&self) -> &[Instrument] {
        &self.items
    }

    /// Back to front.
    #[must_use]
    pub fn draw_order(&self) -> Vec<Instrument> {
        let mut items = self.items.clone();
        items.sort_by_key(|item| item.z);
        items
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    #[must_use]
    pub fn dragging(&self) -> Option<u64> {
        self.drag.map(|drag| drag.id)
    }

    /// Places a new instrument centered in a `width` x `height` viewport,
    /// stacked above the existing ones.
    #[allow(clippy::cast_possible_truncation, clippy::cast_possible_wrap)]
    pub fn add(&mut self, kind: InstrumentKind, width: u16, height: u16) -> u64 {
        self.next_id += 1;
        let id = self.next_id;
        let x = (i32::from(width) - i32::from(CARD_WIDTH)) / 2;
        let y = (i32::from(height) - i32::from(CARD_HEIGHT)) / 2;
        let z = self.items.len() as u32 + BASE_Z;
        self.items.push(Instrument {
            id,
            kind,
            x: x.max(0),
            y: y.max(0),
            z,
        });
        self.bring_to_front(id);
        id
    }

    pub fn remove(&mut self, id: u64) -> bool {
        let before = self.items.len();
        self.items.retain(|item| item.id != id);
        if self.drag.is_some_and(|drag| drag.id == id) {
            self.drag = None;
        }
        before != self.items.len()
    }

    pub fn remove_front(&mut self) -> Option<u64> {
        let id = self.items.iter().max_by_key(|item| item.z)?.id;
        self.remove(id);
        Some(id)
    }

    pub fn bring_to_front(&mut self, id: u64) {
        let top = self.items.iter().map(|item| item.z).max().unwrap_or(BASE_Z);
        let shared_top = self.items.iter().filter(|item| item.z == top).count() > 1;
        if let Some(item) = self.items.iter_mut().find(|item| item.id == id)
            && (item.z < top || shared_top)
        {
            item.z = top + 1;
        }
    }

    /// Front-most instrument under the cursor.
    #[must_use]
    pub fn hit_test(&self, col: i32, row: i32) -> Option<Instrument> {
        self.items
            .iter()
            .filter(|item| item.contains(col, row))
            .max_by_key(|item| item.z)
            .copied()
    }

    /// Handles a left press: closes via the `x`, otherwise grabs and raises.
    pub fn press(&mut self, col: i32, row: i32) -> bool {
        let Some(hit) = self.hit_test(col, row) else {
            return false;
        };
        if hit.close_hit(col, row) {
            self.remove(hit.id);
            return true;
        }
        self.bring_to_front(hit.id);
        self.drag = Some(Drag {
            id: hit.id,
            grab_dx: col - hit.x,
            grab_dy: row - hit.y,
        });
        true
    }

    /// No-op unless a drag is in progress.
    pub fn drag_to(&mut self, col: i32, row: i32) {
        let Some(drag) = self.drag else {
            return;
        };
        if let Some(item) = self.items.iter_mut().find(|item| item.id == drag.id) {
            item.x = col - drag.grab_dx;
            item.y = row - drag.grab_dy;
        }
    }

    pub fn release(&mut self) {
        self.drag = None;
    }

    /// Keeps every card fully inside a `width` x `height` viewport.
    pub fn clamp_to(&mut self, width: u16, height: u16) {
        let max_x = (i32::from(width) - i32::from(CARD_WIDTH)).max(0);
        let max_y = (i32::from(height) - i32::from(CARD_HEIGHT)).max(0);
        for item in &mut self.items {
            item.x = item.x.clamp(0, max_x);
            item.y = item.y.clamp(0, max_y);
        }
    }
}
