//! Static normative tables.
//!
//! Head circumference values are in millimetres (WHO Child Growth Standards,
//! head-circumference-for-age, columns p3 / p15 / p50 / p85 / p97).
//! Cephalic index values are plain index points (columns p3 / p10 / p50 /
//! p90 / p97); the table is sex-independent.

use super::Breakpoint;

const fn bp(age_months: f64, values: [f64; 5]) -> Breakpoint {
    Breakpoint { age_months, values }
}

pub(super) const HEAD_CIRCUMFERENCE_MALE: &[Breakpoint] = &[
    bp(0.0, [321.0, 331.0, 345.0, 358.0, 369.0]),
    bp(1.0, [351.0, 361.0, 373.0, 385.0, 395.0]),
    bp(2.0, [369.0, 379.0, 391.0, 403.0, 413.0]),
    bp(3.0, [383.0, 393.0, 405.0, 417.0, 427.0]),
    bp(4.0, [394.0, 404.0, 416.0, 429.0, 439.0]),
    bp(5.0, [403.0, 413.0, 426.0, 438.0, 448.0]),
    bp(6.0, [410.0, 421.0, 433.0, 446.0, 456.0]),
    bp(7.0, [417.0, 427.0, 440.0, 452.0, 463.0]),
    bp(8.0, [422.0, 432.0, 445.0, 458.0, 469.0]),
    bp(9.0, [426.0, 437.0, 450.0, 463.0, 474.0]),
    bp(10.0, [430.0, 441.0, 454.0, 467.0, 478.0]),
    bp(11.0, [434.0, 444.0, 458.0, 471.0, 482.0]),
    bp(12.0, [436.0, 447.0, 461.0, 474.0, 485.0]),
    bp(15.0, [443.0, 454.0, 468.0, 482.0, 493.0]),
    bp(18.0, [449.0, 460.0, 474.0, 488.0, 499.0]),
    bp(21.0, [453.0, 464.0, 478.0, 493.0, 504.0]),
    bp(24.0, [457.0, 468.0, 483.0, 497.0, 508.0]),
];

pub(super) const HEAD_CIRCUMFERENCE_FEMALE: &[Breakpoint] = &[
    bp(0.0, [317.0, 327.0, 339.0, 351.0, 361.0]),
    bp(1.0, [343.0, 353.0, 365.0, 378.0, 388.0]),
    bp(2.0, [360.0, 370.0, 383.0, 395.0, 405.0]),
    bp(3.0, [372.0, 382.0, 395.0, 408.0, 419.0]),
    bp(4.0, [382.0, 393.0, 406.0, 419.0, 430.0]),
    bp(5.0, [390.0, 401.0, 415.0, 428.0, 439.0]),
    bp(6.0, [397.0, 408.0, 422.0, 435.0, 446.0]),
    bp(7.0, [404.0, 415.0, 428.0, 442.0, 453.0]),
    bp(8.0, [409.0, 420.0, 434.0, 447.0, 459.0]),
    bp(9.0, [413.0, 424.0, 438.0, 452.0, 463.0]),
    bp(10.0, [417.0, 428.0, 442.0, 456.0, 468.0]),
    bp(11.0, [420.0, 432.0, 446.0, 460.0, 471.0]),
    bp(12.0, [423.0, 435.0, 449.0, 463.0, 475.0]),
    bp(15.0, [430.0, 442.0, 457.0, 471.0, 482.0]),
    bp(18.0, [436.0, 448.0, 462.0, 477.0, 488.0]),
    bp(21.0, [441.0, 453.0, 467.0, 482.0, 494.0]),
    bp(24.0, [446.0, 457.0, 472.0, 486.0, 498.0]),
];

pub(super) const CEPHALIC_INDEX: &[Breakpoint] = &[
    bp(0.0, [70.0, 72.5, 78.0, 84.0, 87.0]),
    bp(3.0, [72.0, 74.5, 80.0, 86.0, 89.0]),
    bp(6.0, [73.0, 75.5, 81.0, 87.0, 90.0]),
    bp(9.0, [73.0, 75.5, 81.0, 87.0, 90.0]),
    bp(12.0, [72.5, 75.0, 80.5, 86.5, 89.5]),
    bp(18.0, [72.0, 74.5, 80.0, 86.0, 89.0]),
    bp(24.0, [71.5, 74.0, 79.5, 85.5, 88.5]),
];
