//! Grades command handler

use cgpa_calc::core::scale::GradeScale;
use cgpa_calc::core::session::render_scale;

/// Print the grade table of `scale`
pub fn run(scale: GradeScale) {
    print!("{}", render_scale(scale));
}
