//! Snapshot tests using the insta crate.
//!
//! These pin the JSON wire shape of layouts and drag previews, which hosts
//! persist and send to their renderers. To update after an intentional
//! change:
//! ```sh
//! cargo insta test --accept
//! ```

use crate::helpers::block;
use brickgrid::{Breakpoint, Grid, GridPoint, GridRect};
use serde_json::json;

#[test]
fn snapshot_block_with_manual_height() {
    let mut hero = block("hero", GridRect::new(2, 3, 10, 5));
    hero.props.insert("title".into(), json!("Hello"));
    hero.position.mobile.manual_height = Some(6);

    insta::assert_json_snapshot!(hero, @r#"
    {
      "id": "hero",
      "type": "text",
      "props": {
        "title": "Hello"
      },
      "position": {
        "mobile": {
          "x": 0,
          "y": 0,
          "w": 8,
          "h": 4,
          "manualHeight": 6
        },
        "desktop": {
          "x": 2,
          "y": 3,
          "w": 10,
          "h": 5
        }
      }
    }
    "#);
}

#[test]
fn snapshot_forbidden_ghost() {
    let mut existing = block("a", GridRect::new(0, 0, 10, 5));
    existing.props.insert("text".into(), json!("Intro"));
    let layout = vec![existing];
    let dragged = block("d", GridRect::new(0, 12, 10, 5));

    let ghost = Grid::default().ghost_position(&dragged, &layout, Breakpoint::Desktop, GridPoint::new(0, 0));

    insta::assert_json_snapshot!(ghost, @r#"
    {
      "x": 0,
      "y": 0,
      "w": 10,
      "h": 5,
      "forbidden": true,
      "collisions": [
        {
          "block": {
            "id": "a",
            "type": "text",
            "props": {
              "text": "Intro"
            },
            "position": {
              "mobile": {
                "x": 0,
                "y": 0,
                "w": 8,
                "h": 4
              },
              "desktop": {
                "x": 0,
                "y": 0,
                "w": 10,
                "h": 5
              }
            }
          },
          "sides": [
            "top",
            "bottom",
            "left",
            "right"
          ],
          "distance": 0
        }
      ]
    }
    "#);
}
