//! Cairo painting for planned border frames.

use cairo::Context;

use crate::plan::BorderLine;

/// Stroke a planned frame onto a Cairo context.
///
/// Strokes are drawn in plan order with butt caps so adjacent pixel strokes
/// tile the border without overlap.
pub fn paint_border(cr: &Context, lines: &[BorderLine]) -> Result<(), cairo::Error> {
    if lines.is_empty() {
        return Ok(());
    }

    cr.save()?;
    cr.set_line_cap(cairo::LineCap::Butt);
    for line in lines {
        line.color.apply_to_cairo(cr);
        cr.set_line_width(line.width);
        cr.move_to(line.x1, line.y1);
        cr.line_to(line.x2, line.y2);
        cr.stroke()?;
    }
    cr.restore()?;
    Ok(())
}
