/// A positioned, coloured box for the div-rectangles page.
#[derive(Debug, Clone, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub hue: u16,
}

/// Lays `count` rectangles out left to right in rows of `columns`.
/// Heights vary per index so the rows read as a layout, not a grid.
pub fn layout(count: usize, columns: usize, cell: f32, gap: f32) -> Vec<Rect> {
    let columns = columns.max(1);
    (0..count)
        .map(|i| {
            let (row, col) = (i / columns, i % columns);
            Rect {
                x: col as f32 * (cell + gap),
                y: row as f32 * (cell + gap),
                width: cell,
                height: cell * (0.4 + 0.6 * ((i * 7 % 5) as f32 / 4.0)),
                hue: ((i * 360) / count.max(1)) as u16,
            }
        })
        .collect()
}
