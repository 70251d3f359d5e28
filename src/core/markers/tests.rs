use super::*;
use crate::core::{ScheduleSlot, Tags, Weekday};

fn course(id: &str, room: &str, coordinate: Option<LatLon>) -> CourseRecord {
    CourseRecord {
        id: id.to_string(),
        code: format!("C{id}"),
        room: room.to_string(),
        coordinate,
        ..Default::default()
    }
}

fn faculty(id: &str, coordinate: Option<LatLon>) -> FacultyRecord {
    FacultyRecord {
        id: id.to_string(),
        name: format!("Dozent {id}"),
        coordinate,
        ..Default::default()
    }
}

#[test]
fn courses_are_deduplicated_by_room() {
    let a1 = Some(LatLon::new(39.90, 32.80));
    let b2 = Some(LatLon::new(39.91, 32.81));
    let courses = vec![course("1", "A1", a1), course("2", "A1", a1), course("3", "B2", b2)];

    let index = MarkerIndex::build(&GeoNodes::new(), &[], &courses, &MapOptions::default());

    let room_markers: Vec<&Marker> = index
        .markers()
        .filter(|m| m.kind == MarkerKind::Course)
        .collect();
    assert_eq!(room_markers.len(), 2);
    assert!(index.get(&MarkerId::room("A1")).is_some());
    assert!(index.get(&MarkerId::room("B2")).is_some());

    let a1_entry = index.room("A1").expect("A1 erwartet");
    let ids: Vec<&str> = a1_entry.courses.iter().map(|c| c.id.as_str()).collect();
    assert_eq!(ids, vec!["1", "2"]);
}

#[test]
fn first_course_with_coordinate_positions_the_room() {
    let courses = vec![
        course("1", "A1", None),
        course("2", "A1", Some(LatLon::new(1.0, 2.0))),
        course("3", "A1", Some(LatLon::new(5.0, 6.0))),
    ];

    let index = MarkerIndex::build(&GeoNodes::new(), &[], &courses, &MapOptions::default());
    let marker = index.get(&MarkerId::room("A1")).expect("Marker erwartet");

    assert_eq!(marker.coordinate, LatLon::new(1.0, 2.0));
    assert_eq!(index.room("A1").map(|r| r.courses.len()), Some(3));
}

#[test]
fn room_reduction_is_idempotent() {
    let a1 = Some(LatLon::new(39.90, 32.80));
    let courses = vec![course("1", "A1", a1), course("2", "A1", a1)];
    let options = MapOptions::default();

    let first = MarkerIndex::build(&GeoNodes::new(), &[], &courses, &options);
    let second = MarkerIndex::build(&GeoNodes::new(), &[], &courses, &options);

    let first_ids: Vec<&MarkerId> = first.markers().map(|m| &m.id).collect();
    let second_ids: Vec<&MarkerId> = second.markers().map(|m| &m.id).collect();
    assert_eq!(first_ids, second_ids);
    assert_eq!(first.room("A1"), second.room("A1"));
}

#[test]
fn records_without_coordinates_stay_listable_without_marker() {
    let index = MarkerIndex::build(
        &GeoNodes::new(),
        &[faculty("f1", None)],
        &[course("1", "Lab", None)],
        &MapOptions::default(),
    );

    assert!(index.is_empty());
    assert!(index.faculty("f1").is_some());
    assert!(index.room("Lab").is_some());
}

#[test]
fn all_sources_merge_with_distinct_ids() {
    let mut geo = GeoNodes::new();
    geo.insert(GeoNode::new(
        "100",
        39.92,
        32.85,
        [("building", "university")].into_iter().collect::<Tags>(),
    ));
    geo.insert(GeoNode::new(
        "101",
        39.93,
        32.86,
        [("highway", "path")].into_iter().collect::<Tags>(),
    ));

    let index = MarkerIndex::build(
        &geo,
        &[faculty("100", Some(LatLon::new(39.0, 32.0)))],
        &[course("100", "100", Some(LatLon::new(39.5, 32.5)))],
        &MapOptions::default(),
    );

    let ids: Vec<&str> = index.markers().map(|m| m.id.as_str()).collect();
    assert_eq!(ids, vec!["osm:100", "faculty:100", "room:100"]);
}

#[test]
fn rebuild_without_deleted_record_drops_its_marker() {
    let options = MapOptions::default();
    let coordinate = Some(LatLon::new(39.0, 32.0));
    let before = MarkerIndex::build(
        &GeoNodes::new(),
        &[faculty("f1", coordinate), faculty("f2", coordinate)],
        &[],
        &options,
    );
    assert!(before.get(&MarkerId::faculty("f2")).is_some());

    let after = MarkerIndex::build(&GeoNodes::new(), &[faculty("f1", coordinate)], &[], &options);
    assert!(after.get(&MarkerId::faculty("f2")).is_none());
    assert!(after.faculty("f2").is_none());
    assert_eq!(after.len(), 1);
}

#[test]
fn nearest_finds_marker_by_projected_position() {
    let coordinate = LatLon::new(39.9, 32.8);
    let index = MarkerIndex::build(
        &GeoNodes::new(),
        &[faculty("f1", Some(coordinate))],
        &[],
        &MapOptions::default(),
    );

    let hit = index
        .nearest(coordinate.projected() + DVec2::new(3.0, 4.0), 10.0)
        .expect("Treffer erwartet");
    assert_eq!(hit.id, MarkerId::faculty("f1"));
    assert!((hit.distance - 5.0).abs() < 1e-6);
}

#[test]
fn room_schedule_is_sorted_by_day_and_time() {
    let mut late = course("1", "A1", None);
    late.slot = ScheduleSlot {
        day: Weekday::Monday,
        start_time: "13:00".into(),
        end_time: "14:00".into(),
    };
    let mut early = course("2", "A1", None);
    early.slot = ScheduleSlot {
        day: Weekday::Monday,
        start_time: "09:00".into(),
        end_time: "10:00".into(),
    };
    let mut unknown = course("3", "A1", None);
    unknown.slot.day = Weekday::Unknown;

    let index = MarkerIndex::build(
        &GeoNodes::new(),
        &[],
        &[unknown, late, early],
        &MapOptions::default(),
    );
    let schedule: Vec<&str> = index
        .room("A1")
        .expect("Raum erwartet")
        .schedule()
        .iter()
        .map(|c| c.id.as_str())
        .collect();
    assert_eq!(schedule, vec!["2", "1", "3"]);
}

#[test]
fn course_without_room_does_not_merge_into_room_named_like_its_id() {
    let courses = vec![
        course("B1", "A1", Some(LatLon::new(39.90, 32.80))),
        course("A1", "", Some(LatLon::new(39.95, 32.85))),
    ];

    let index = MarkerIndex::build(&GeoNodes::new(), &[], &courses, &MapOptions::default());

    assert_eq!(index.room("A1").map(|r| r.courses.len()), Some(1));
    let unassigned = index.room("#A1").expect("eigener Eintrag erwartet");
    assert_eq!(unassigned.courses[0].id, "A1");
    assert!(index.get(&MarkerId::room("#A1")).is_some());
    assert_eq!(index.len(), 2);
}

#[test]
fn many_named_nodes_without_coordinates_build_an_index() {
    let xml: String = std::iter::once("<osm>".to_string())
        .chain((0..100).map(|i| format!(r#"<node id="{i}"><tag k="name" v="Nokta {i}"/></node>"#)))
        .chain(std::iter::once("</osm>".to_string()))
        .collect();
    let geo = crate::osm::load_geo_nodes(&xml);
    assert_eq!(geo.len(), 100);

    let index = MarkerIndex::build(&geo, &[], &[], &MapOptions::default());

    assert_eq!(index.len(), 100);
    let origin = LatLon::new(0.0, 0.0).projected();
    let hit = index.nearest(origin, 1.0).expect("Treffer erwartet");
    assert_eq!(hit.id, MarkerId::place("0"));
}
