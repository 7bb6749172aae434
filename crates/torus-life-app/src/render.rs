use torus_life_core::{AgeGrid, CellGrid};

const BACKGROUND: [u8; 4] = [0x00, 0x00, 0x00, 0xff];
const BLUE: [u8; 4] = [0x00, 0x00, 0xff, 0xff];
const WHITE: [u8; 4] = [0xff, 0xff, 0xff, 0xff];
const RED: [u8; 4] = [0xff, 0x00, 0x00, 0xff];
const GREEN: [u8; 4] = [0x00, 0xff, 0x00, 0xff];

// Ages are sampled after the tick that produced the frame, so a newborn
// arrives here with age 1.
const NEWBORN_MAX_AGE: u32 = 1;
const YOUNG_MAX_AGE: u32 = 6;
const MIDDLE_MAX_AGE: u32 = 12;

/// Colour for one alive cell. Monochrome mode ignores age entirely.
fn cell_color(age: u32, color: bool) -> [u8; 4] {
    if !color {
        return WHITE;
    }
    if age <= NEWBORN_MAX_AGE {
        BLUE
    } else if age <= YOUNG_MAX_AGE {
        WHITE
    } else if age <= MIDDLE_MAX_AGE {
        RED
    } else {
        GREEN
    }
}

/// Paint the board into an RGBA frame of side `(cell_px + 1) * N - 1`.
///
/// Each alive cell becomes a `cell_px`-square block at
/// `((cell_px + 1) * x, (cell_px + 1) * y)`; the one-pixel gutters and every
/// dead cell stay the black background.
pub fn draw(grid: &CellGrid, ages: &AgeGrid, cell_px: u32, color: bool, frame: &mut [u8]) {
    let size = grid.size();
    let cell = cell_px as usize;
    let pitch = cell + 1;
    let side = pitch * size - 1;
    debug_assert_eq!(frame.len(), side * side * 4);

    for pixel in frame.chunks_exact_mut(4) {
        pixel.copy_from_slice(&BACKGROUND);
    }
    for y in 0..size {
        for x in 0..size {
            if !grid.get(x, y) {
                continue;
            }
            let rgba = cell_color(ages.get(x, y), color);
            for row in pitch * y..pitch * y + cell {
                let start = (row * side + pitch * x) * 4;
                for pixel in frame[start..start + cell * 4].chunks_exact_mut(4) {
                    pixel.copy_from_slice(&rgba);
                }
            }
        }
    }
}
