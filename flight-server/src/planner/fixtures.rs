//! Small flight network shared by the planner tests.
//!
//! Helsinki to Houston gets shorter with every extra connection allowed:
//!
//! | flights | route                         | km   |
//! |---------|-------------------------------|------|
//! | 2       | HEL LHR IAH                   | 9000 |
//! | 3       | HEL AMS JFK IAH               | 8900 |
//! | 4       | HEL AMS JFK ORD IAH           | 8850 |
//! | 5       | HEL AMS JFK ORD DFW IAH       | 8840 |
//!
//! There is no direct HEL-IAH flight. Nothing flies back to HEL, and the
//! ICAO-only airport EFHF has no flights at all.

use crate::dataset::Dataset;

pub const AIRPORTS: &str = "\
0,HEL,EFHK
1,LHR,EGLL
2,JFK,KJFK
3,ORD,KORD
4,DFW,KDFW
5,IAH,KIAH
6,AMS,EHAM
7,ATL,KATL
8,\\N,EFHF
";

pub const ROUTES: &str = "\
0,1,1000
0,6,1100
1,5,8000
1,0,1000
6,2,5800
2,5,2000
2,1,5500
2,3,1100
3,5,850
3,4,500
4,5,340
5,7,500
";

pub const HEL: u32 = 0;
pub const LHR: u32 = 1;
pub const JFK: u32 = 2;
pub const ORD: u32 = 3;
pub const DFW: u32 = 4;
pub const IAH: u32 = 5;
pub const AMS: u32 = 6;
pub const ATL: u32 = 7;
pub const EFHF: u32 = 8;

pub fn sample_dataset() -> Dataset {
    Dataset::from_readers(AIRPORTS.as_bytes(), ROUTES.as_bytes()).unwrap()
}
