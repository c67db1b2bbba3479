use life_board::{BoardSize, CellCoord, LifeSimulator};

pub const LIVE_CELL_RGBA: [u8; 4] = [0x80, 0x80, 0x80, 0xff];
pub const DEAD_CELL_RGBA: [u8; 4] = [0x00, 0x00, 0x40, 0xff];
pub const GRID_LINE_RGBA: [u8; 4] = [0x20, 0x20, 0x60, 0xff];

/// Frame buffer dimensions `(width, height)` covering whole cells only.
pub fn frame_size(size: BoardSize, cell_size: u32) -> (u32, u32) {
    (size.columns * cell_size, size.rows * cell_size)
}

/// Paints the background grid, then each live cell as a square inset one
/// pixel from its cell's top-left corner. Cells smaller than three pixels
/// are drawn solid, without grid lines.
pub fn render_frame(frame: &mut [u8], frame_width: u32, cell_size: u32, live_cells: &[CellCoord]) {
    let inset = u32::from(cell_size > 2);
    for (index, pixel) in frame.chunks_exact_mut(4).enumerate() {
        let x = index as u32 % frame_width;
        let y = index as u32 / frame_width;
        let on_grid_line = inset == 1 && (x % cell_size == 0 || y % cell_size == 0);
        pixel.copy_from_slice(if on_grid_line {
            &GRID_LINE_RGBA
        } else {
            &DEAD_CELL_RGBA
        });
    }

    for cell in live_cells {
        let (left, top) = cell.pixel_origin(cell_size);
        for y in (top + inset)..(top + cell_size) {
            for x in (left + inset)..(left + cell_size) {
                let offset = 4 * (y as usize * frame_width as usize + x as usize);
                if let Some(pixel) = frame.get_mut(offset..offset + 4) {
                    pixel.copy_from_slice(&LIVE_CELL_RGBA);
                }
            }
        }
    }
}

pub fn window_title(simulator: &LifeSimulator) -> String {
    let state = if simulator.is_running() {
        "running"
    } else {
        "stopped"
    };
    format!(
        "Conway's Game of Life - {state} - generation {}",
        simulator.generation()
    )
}
