use spherecoord::{Error, Geodetic, LocalOffset, ReferenceParams, SphericalCoordinates, SurfaceModel};

fn frame(lat: f64, lon: f64, heading: f64) -> SphericalCoordinates {
    SphericalCoordinates::with_reference(ReferenceParams::new(SurfaceModel::EarthWgs84, lat, lon, heading)).unwrap()
}

fn assert_close(a: f64, b: f64, eps: f64) {
    let diff = (a - b).abs();
    assert!(diff <= eps, "expected {a} ~= {b} (diff {diff})");
}

#[test]
fn zero_offset_is_reference() {
    for (lat, lon, heading) in [
        (37.0, -122.0, 0.0),
        (0.0, 0.0, 0.0),
        (-45.5, 179.5, 123.0),
        (89.9, -180.0, 270.0),
        (-90.0, 12.0, 0.0),
        (90.0, 0.0, 45.0),
        (12.25, -0.5, 359.9),
    ] {
        let coord = frame(lat, lon, heading).convert([0.0, 0.0, 0.0]).unwrap();
        assert_eq!(coord.latitude(), lat);
        assert_eq!(coord.longitude(), lon);
        assert_eq!(coord.altitude(), 0.0);
    }
}

#[test]
fn wgs84_literal_scenario() {
    let frame = frame(37.0, -122.0, 0.0);

    let origin = frame.convert([0.0, 0.0, 0.0]).unwrap();
    assert_eq!(origin.to_array(), [37.0, -122.0, 0.0]);

    let north = frame.convert([0.0, 111_320.0, 0.0]).unwrap();
    assert_close(north.latitude(), 38.0, 0.01);
    assert_eq!(north.longitude(), -122.0);
    assert_eq!(north.altitude(), 0.0);
}

#[test]
fn axes_at_zero_heading() {
    let frame = frame(0.0, 0.0, 0.0);

    let north = frame.convert([0.0, 1000.0, 0.0]).unwrap();
    assert!(north.latitude() > 0.0);
    assert_eq!(north.longitude(), 0.0);

    let east = frame.convert([1000.0, 0.0, 0.0]).unwrap();
    assert!(east.longitude() > 0.0);
    assert_eq!(east.latitude(), 0.0);

    // 1 km along the equator
    assert_close(east.longitude(), (1000.0_f64 / 6_378_137.0).to_degrees(), 1e-12);
}

#[test]
fn quarter_turn_heading_swaps_axes() {
    let plain = frame(20.0, 30.0, 0.0);
    let turned = frame(20.0, 30.0, 90.0);

    // With a 90° heading, local +X is north and local +Y is west
    let a = turned.convert([500.0, 0.0, 0.0]).unwrap();
    let b = plain.convert([0.0, 500.0, 0.0]).unwrap();
    assert_close(a.latitude(), b.latitude(), 1e-12);
    assert_close(a.longitude(), b.longitude(), 1e-12);

    let a = turned.convert([0.0, 500.0, 0.0]).unwrap();
    let b = plain.convert([-500.0, 0.0, 0.0]).unwrap();
    assert_close(a.latitude(), b.latitude(), 1e-12);
    assert_close(a.longitude(), b.longitude(), 1e-12);
}

#[test]
fn heading_is_periodic() {
    let a = frame(-12.0, 100.0, 30.0).convert([123.0, -456.0, 7.0]).unwrap();
    let b = frame(-12.0, 100.0, 390.0).convert([123.0, -456.0, 7.0]).unwrap();
    let c = frame(-12.0, 100.0, -330.0).convert([123.0, -456.0, 7.0]).unwrap();

    assert_close(a.latitude(), b.latitude(), 1e-12);
    assert_close(a.longitude(), b.longitude(), 1e-12);
    assert_close(a.latitude(), c.latitude(), 1e-12);
    assert_close(a.longitude(), c.longitude(), 1e-12);
}

#[test]
fn altitude_passes_through() {
    let coord = frame(51.5, -0.12, 10.0).convert([10.0, 20.0, -35.5]).unwrap();
    assert_eq!(coord.altitude(), -35.5);
}

#[test]
fn reference_elevation_is_added() {
    let params = ReferenceParams::new(SurfaceModel::EarthWgs84, 51.5, -0.12, 0.0).with_elevation(100.0);
    let frame = SphericalCoordinates::with_reference(params).unwrap();

    assert_eq!(frame.convert([0.0, 0.0, 0.0]).unwrap().altitude(), 100.0);
    assert_eq!(frame.convert([0.0, 0.0, 2.5]).unwrap().altitude(), 102.5);
}

#[test]
fn small_offsets_invert_through_the_radii() {
    let frame = frame(37.0, -122.0, 17.0);
    let radii = frame.radii().unwrap();
    let lat0 = 37.0_f64.to_radians();
    let (sin_h, cos_h) = 17.0_f64.to_radians().sin_cos();

    for (x, y) in [(0.0, 0.0), (1000.0, 0.0), (0.0, -1000.0), (-750.0, 640.0), (999.0, 999.0), (-3.5, 0.25)] {
        let coord = frame.convert([x, y, 0.0]).unwrap();

        let north = (coord.latitude() - 37.0).to_radians() * radii.north;
        let east = (coord.longitude() + 122.0).to_radians() * radii.east * lat0.cos();
        let x_back = east * cos_h + north * sin_h;
        let y_back = -east * sin_h + north * cos_h;

        assert_close(x_back, x, 1e-6);
        assert_close(y_back, y, 1e-6);

        let local = frame.local_from_geodetic(&coord).unwrap();
        assert_close(local.x, x, 1e-6);
        assert_close(local.y, y, 1e-6);
    }
}

#[test]
fn linear_model_agrees_with_great_circle_distance() {
    let frame = frame(45.0, 7.0, 0.0);
    let origin = frame.convert([0.0, 0.0, 0.0]).unwrap();
    let coord = frame.convert([600.0, 800.0, 0.0]).unwrap();

    // Mean-sphere haversine is within half a percent of the ellipsoidal distance here
    assert_close(origin.haversine(&coord), 1000.0, 5.0);
}

#[test]
fn longitude_wraps_across_antimeridian() {
    let east = frame(10.0, 179.99, 0.0).convert([5000.0, 0.0, 0.0]).unwrap();
    assert!(east.longitude() < -179.9 && east.longitude() >= -180.0);

    let west = frame(10.0, -179.99, 0.0).convert([-5000.0, 0.0, 0.0]).unwrap();
    assert!(west.longitude() > 179.9 && west.longitude() < 180.0);

    let back = frame(10.0, 179.99, 0.0).local_from_geodetic(&east).unwrap();
    assert_close(back.x, 5000.0, 1e-6);
    assert_close(back.y, 0.0, 1e-6);
}

#[test]
fn crossing_a_pole_is_out_of_domain() {
    let north = frame(89.9999, 0.0, 0.0);
    assert!(matches!(north.convert([0.0, 1000.0, 0.0]), Err(Error::OutOfDomain(_))));
    assert!(north.convert([0.0, -1000.0, 0.0]).is_ok());

    let south = frame(-89.9999, 0.0, 0.0);
    assert!(matches!(south.convert([0.0, -1000.0, 0.0]), Err(Error::OutOfDomain(_))));
}

#[test]
fn east_offset_at_pole_is_singular() {
    let pole = frame(-90.0, 0.0, 0.0);

    assert!(matches!(pole.convert([1.0, 0.0, 0.0]), Err(Error::SingularAtPole(_))));
    assert!(matches!(pole.convert([0.0, -1.0, 0.0]), Err(Error::OutOfDomain(_))));

    let coord = pole.convert([0.0, 1000.0, 5.0]).unwrap();
    assert!(coord.latitude() > -90.0);
    assert_eq!(coord.longitude(), 0.0);
    assert_eq!(coord.altitude(), 5.0);

    let elsewhere = Geodetic::create(-89.0, 45.0, 0.0).unwrap();
    assert!(matches!(pole.local_from_geodetic(&elsewhere), Err(Error::SingularAtPole(_))));
}

#[test]
fn non_finite_offsets_rejected() {
    let frame = frame(0.0, 0.0, 0.0);
    for offset in [
        LocalOffset::new(f64::NAN, 0.0, 0.0),
        LocalOffset::new(0.0, f64::INFINITY, 0.0),
        LocalOffset::new(0.0, 0.0, f64::NEG_INFINITY),
    ] {
        assert!(matches!(frame.convert(offset), Err(Error::OutOfDomain(_))));
    }
}

#[test]
fn concurrent_conversions_share_a_frame() {
    let frame = frame(-33.86, 151.21, 45.0);
    let expected: Vec<_> = (0..64)
        .map(|i| frame.convert([f64::from(i) * 10.0, -f64::from(i), 0.0]).unwrap())
        .collect();

    std::thread::scope(|scope| {
        for _ in 0..4 {
            scope.spawn(|| {
                for (i, want) in (0..64).zip(&expected) {
                    let got = frame.convert([f64::from(i) * 10.0, -f64::from(i), 0.0]).unwrap();
                    assert_eq!(&got, want);
                }
            });
        }
    });
}

#[test]
fn polar_reference_with_turned_heading() {
    for heading in [30.0, 90.0, 135.0, 270.0] {
        let pole = frame(90.0, 0.0, heading);
        let (sin_h, cos_h) = f64::to_radians(heading).sin_cos();

        // Local direction that points due south for this heading
        let south = [-1000.0 * sin_h, -1000.0 * cos_h, 0.0];
        let coord = pole.convert(south).unwrap();
        assert!(coord.latitude() < 90.0 && coord.latitude() > 89.99, "heading {heading}");
        assert_eq!(coord.longitude(), 0.0);

        let back = pole.local_from_geodetic(&coord).unwrap();
        assert_close(back.x, south[0], 1e-6);
        assert_close(back.y, south[1], 1e-6);

        // ... and due east, which has no defined longitude step at the pole
        let east = [1000.0 * cos_h, -1000.0 * sin_h, 0.0];
        assert!(matches!(pole.convert(east), Err(Error::SingularAtPole(_))));
    }
}

#[test]
fn huge_offsets_keep_longitude_in_range() {
    let frame = frame(0.0, 0.0, 0.0);
    for x in [1e300, -1e300, 1e15, -4.2e9] {
        let coord = frame.convert([x, 0.0, 0.0]).unwrap();
        assert!(
            (-180.0..180.0).contains(&coord.longitude()),
            "offset {x} gave longitude {}",
            coord.longitude()
        );
        assert_eq!(coord.latitude(), 0.0);
    }
}
