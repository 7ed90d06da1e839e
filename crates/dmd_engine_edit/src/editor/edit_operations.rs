use dmd_engine::{ClockSize, ClockType, DropDirection, EngineError, Position, Result, Transition, paint};

use super::EditState;

/// The header fields a form can edit. Text input is validated per field:
/// integer fields must parse, transitions must be one of the two known
/// values, clock type/size keep unknown strings verbatim.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HeaderField {
    IntroTransition,
    OutroTransition,
    ClockType,
    ClockSize,
    ClockStartFrame,
    ClockEndFrame,
    ClockPositionX,
    ClockPositionY,
}

impl HeaderField {
    fn name(self) -> &'static str {
        match self {
            HeaderField::IntroTransition => "intro_transition",
            HeaderField::OutroTransition => "outro_transition",
            HeaderField::ClockType => "clock_type",
            HeaderField::ClockSize => "clock_size",
            HeaderField::ClockStartFrame => "clock_start_frame",
            HeaderField::ClockEndFrame => "clock_end_frame",
            HeaderField::ClockPositionX => "clock_position_x",
            HeaderField::ClockPositionY => "clock_position_y",
        }
    }
}

impl EditState {
    /// Take the undo snapshot for a drag-paint stroke. Called once on
    /// pointer-down; the following `paint_pixel` calls share it.
    pub fn begin_stroke(&mut self) {
        let bitmap = self.current_frame().bitmap.clone();
        self.history_mut().snapshot(&bitmap);
    }

    /// Paint one pixel with the active color. Positions off the panel are
    /// ignored; drags routinely leave the grid.
    pub fn paint_pixel(&mut self, pos: impl Into<Position>) -> Result<()> {
        let pos = pos.into();
        if self.current_frame().pixel(pos).is_none() {
            return Ok(());
        }
        let color = self.active_color();
        self.current_frame_mut().set_pixel(pos, color)
    }

    /// Flood-fill the region under `pos` with the active color.
    pub fn fill_at(&mut self, pos: impl Into<Position>) -> Result<()> {
        let pos = pos.into();
        self.begin_stroke();
        let Some(target) = self.current_frame().pixel(pos) else {
            return Ok(());
        };
        let color = self.active_color();
        paint::flood_fill(self.current_frame_mut(), pos, target, color)
    }

    /// Border mode: fill the region under `pos` with the active color, then
    /// outline the filled region.
    pub fn outline_at(&mut self, pos: impl Into<Position>) -> Result<()> {
        let pos = pos.into();
        self.begin_stroke();
        let Some(target) = self.current_frame().pixel(pos) else {
            return Ok(());
        };
        let color = self.active_color();
        paint::flood_fill(self.current_frame_mut(), pos, target, color)?;
        paint::trace_outline(self.current_frame_mut(), pos)
    }

    /// Change the selected frame's duration.
    pub fn set_frame_duration(&mut self, ms: u32) -> Result<()> {
        let frame_idx = self.selected_frame();
        self.document_mut().set_frame_duration(frame_idx, ms)
    }

    /// Text-input boundary for the duration field.
    pub fn set_frame_duration_text(&mut self, text: &str) -> Result<()> {
        let ms: u32 = text
            .trim()
            .parse()
            .map_err(|_| EngineError::invalid_field("duration", text))?;
        self.set_frame_duration(ms)
    }

    /// Drop the selected frame, merging its duration into the neighbor in
    /// `direction`, and move the selection where the merge went.
    pub fn drop_frame(&mut self, direction: DropDirection) -> Result<()> {
        let frame_idx = self.selected_frame();
        let selected = self.document_mut().drop_frame(frame_idx, direction)?;
        self.select_to_dropped_neighbor(selected);
        Ok(())
    }

    fn select_to_dropped_neighbor(&mut self, selected: usize) {
        // the frame under the old history snapshots no longer exists
        self.history_mut().clear();
        self.set_selected_frame_raw(selected);
    }

    /// Apply a text edit to a header field, validating per field type.
    pub fn set_header_field(&mut self, field: HeaderField, value: &str) -> Result<()> {
        let header = &mut self.document_mut().header;
        match field {
            HeaderField::IntroTransition | HeaderField::OutroTransition => {
                let transition = match value {
                    "Enable" => Transition::Enable,
                    "Disable" => Transition::Disable,
                    _ => return Err(EngineError::invalid_field(field.name(), value)),
                };
                if field == HeaderField::IntroTransition {
                    header.intro_transition = transition;
                } else {
                    header.outro_transition = transition;
                }
            }
            HeaderField::ClockType => {
                header.clock_type = match value {
                    "ClockOnTop" => ClockType::ClockOnTop,
                    "ClockBehind" => ClockType::ClockBehind,
                    other => ClockType::Other(other.to_string()),
                };
            }
            HeaderField::ClockSize => {
                header.clock_size = match value {
                    "ClockLarge" => ClockSize::ClockLarge,
                    "ClockSmall" => ClockSize::ClockSmall,
                    other => ClockSize::Other(other.to_string()),
                };
            }
            HeaderField::ClockStartFrame | HeaderField::ClockEndFrame | HeaderField::ClockPositionX | HeaderField::ClockPositionY => {
                let parsed: i32 = value
                    .trim()
                    .parse()
                    .map_err(|_| EngineError::invalid_field(field.name(), value))?;
                match field {
                    HeaderField::ClockStartFrame => header.clock_start_frame = parsed,
                    HeaderField::ClockEndFrame => header.clock_end_frame = parsed,
                    HeaderField::ClockPositionX => header.clock_position_x = parsed,
                    HeaderField::ClockPositionY => header.clock_position_y = parsed,
                    _ => unreachable!(),
                }
            }
        }
        Ok(())
    }
}
