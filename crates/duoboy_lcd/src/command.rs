const TAG_NOP: u8 = 0;
const TAG_LCD_LINE: u8 = 1;
const TAG_IDLE_SET: u8 = 2;
const TAG_SET_PIXEL: u8 = 3;

/// A command sent from the emulation core to the display core.
///
/// On the wire this is a 32-bit word: byte 0 carries the tag, bytes 1 and 2
/// are zero and byte 3 carries the payload.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum DisplayCommand {
    Nop,
    /// Composite and push the staged scanline with this index.
    LcdLine(u8),
    /// Clear the display and switch to the given scaling mode.
    IdleSet(u8),
    /// Debug only.
    SetPixel(u8),
}

impl DisplayCommand {
    pub const fn tag(&self) -> u8 {
        match self {
            DisplayCommand::Nop => TAG_NOP,
            DisplayCommand::LcdLine(_) => TAG_LCD_LINE,
            DisplayCommand::IdleSet(_) => TAG_IDLE_SET,
            DisplayCommand::SetPixel(_) => TAG_SET_PIXEL,
        }
    }

    pub const fn data(&self) -> u8 {
        match *self {
            DisplayCommand::Nop => 0,
            DisplayCommand::LcdLine(d) | DisplayCommand::IdleSet(d) | DisplayCommand::SetPixel(d) => d,
        }
    }

    pub const fn pack(self) -> u32 {
        u32::from_le_bytes([self.tag(), 0, 0, self.data()])
    }

    /// Decodes a command word. Unknown tags yield `None`.
    pub const fn unpack(word: u32) -> Option<Self> {
        let [tag, _, _, data] = word.to_le_bytes();
        match tag {
            TAG_NOP => Some(DisplayCommand::Nop),
            TAG_LCD_LINE => Some(DisplayCommand::LcdLine(data)),
            TAG_IDLE_SET => Some(DisplayCommand::IdleSet(data)),
            TAG_SET_PIXEL => Some(DisplayCommand::SetPixel(data)),
            _ => None,
        }
    }
}

impl From<DisplayCommand> for u32 {
    fn from(cmd: DisplayCommand) -> u32 {
        cmd.pack()
    }
}
