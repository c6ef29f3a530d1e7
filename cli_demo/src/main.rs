extern crate gesture_lookup;
extern crate serde_derive;

use gesture_lookup::{GestureEngine, Point};
use serde_derive::{Deserialize, Serialize};
use std::time::Instant;

const ITERS: usize = 10_000;

// Clean shape templates on a 256x256 canvas
static TEMPLATES: &str = r#"[
    { "name": "dash",     "points": [[0,128],[64,128],[128,128],[192,128],[255,128]] },
    { "name": "pole",     "points": [[128,0],[128,64],[128,128],[128,192],[128,255]] },
    { "name": "corner",   "points": [[0,0],[128,0],[255,0],[255,128],[255,255]] },
    { "name": "zigzag",   "points": [[0,0],[255,0],[0,255],[255,255]] },
    { "name": "triangle", "points": [[128,0],[255,255],[0,255],[128,0]] }
]"#;

// Mouse-drawn strokes captured from the same canvas, labeled with the
// template they were meant to be
static STROKES: &str = r#"[
    { "name": "dash",     "points": [[31,140],[44,139],[67,138],[95,139],[121,141],[150,142],[178,141],[201,139],[219,138]] },
    { "name": "pole",     "points": [[117,22],[117,39],[116,68],[116,101],[117,136],[119,170],[120,198],[120,221]] },
    { "name": "corner",   "points": [[28,51],[66,49],[112,47],[158,48],[196,50],[199,84],[200,127],[201,168],[200,203]] },
    { "name": "zigzag",   "points": [[25,40],[101,38],[180,37],[226,39],[168,98],[96,161],[40,214],[110,216],[189,215],[229,217]] },
    { "name": "triangle", "points": [[130,31],[160,85],[192,142],[221,196],[158,198],[90,197],[35,195],[67,140],[99,87],[127,36]] }
]"#;

#[derive(Serialize, Deserialize)]
struct Sample {
    name: String,
    points: Vec<Vec<u32>>,
}

fn get_points(raw: &Vec<Vec<u32>>) -> Vec<Point> {
    let mut points: Vec<Point> = Vec::with_capacity(raw.len());
    for pt in raw {
        points.push(Point { x: pt[0], y: pt[1] });
    }
    return points;
}

fn main() {
    let templates: Vec<Sample> = serde_json::from_str(TEMPLATES).expect("Bad template JSON.");
    let strokes: Vec<Sample> = serde_json::from_str(STROKES).expect("Bad stroke JSON.");

    let mut engine = GestureEngine::new();
    let mut names: Vec<String> = Vec::with_capacity(templates.len());
    for template in &templates {
        let id = engine
            .register_gesture(&get_points(&template.points))
            .expect("Failed to register template.");
        assert_eq!(id, names.len());
        names.push(template.name.clone());
    }

    println!(
        "Registered {} templates; starting {} cycles of evaluation.",
        names.len(),
        ITERS
    );
    let start = Instant::now();
    let mut guessed = 0;
    for _ in 0..ITERS {
        for sample in &strokes {
            engine.clear();
            for pt in &sample.points {
                engine.add_point(pt[0], pt[1]).expect("Failed to append point.");
            }
            let m = engine.recognize().expect("Recognition failed.");
            if names[m.id] == sample.name {
                guessed += 1;
            }
        }
    }
    let duration = start.elapsed();
    println!(
        "Finished in {:?}. Correct guesses: {} of {}.",
        duration,
        guessed,
        ITERS * strokes.len()
    );
}
