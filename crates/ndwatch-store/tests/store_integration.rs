//! Integration tests for the MAC association store.
//!
//! Exercises the store the way the capture loop and the detection sweeps
//! use it together: observe, promote to tracked host, update in place,
//! sweep, retire.

#[cfg(test)]
mod tests {
    use ndwatch_store::{HostRecord, MacSet, StoreError};
    use ndwatch_types::MacAddress;
    use std::net::Ipv6Addr;

    /// Test helper to create a host record
    fn make_host(mac: &str, ip: &str) -> HostRecord {
        HostRecord::new(
            mac.parse::<MacAddress>().expect("valid MAC"),
            ip.parse::<Ipv6Addr>().expect("valid IPv6 address"),
        )
    }

    #[test]
    fn test_observe_then_promote_to_tracked_host() {
        let mut seen: MacSet<HostRecord> = MacSet::with_capacity(0).unwrap();
        let mac: MacAddress = "00:11:22:33:44:55".parse().unwrap();

        // First sighting: bare presence.
        seen.add(mac).unwrap();
        assert!(seen.contains(mac));
        assert!(seen.get(mac).is_none());

        // Later sighting with an advertised address: attach host state.
        let host = make_host("00:11:22:33:44:55", "fe80::1");
        seen.add_host(Some(&host)).unwrap();
        assert_eq!(seen.count(), 1);

        let tracked = seen.get(mac).unwrap();
        assert_eq!(tracked.mac, mac);
        assert_eq!(tracked.ip, "fe80::1".parse::<Ipv6Addr>().unwrap());
    }

    #[test]
    fn test_update_tracked_host_in_place() {
        let mut seen: MacSet<HostRecord> = MacSet::with_capacity(0).unwrap();
        let mac: MacAddress = "00:11:22:33:44:55".parse().unwrap();
        seen.add_host(Some(&make_host("00:11:22:33:44:55", "fe80::1"))).unwrap();

        {
            let host = seen.get_mut(mac).unwrap();
            host.touch();
            host.mark_router();
        }

        assert!(seen.get(mac).unwrap().router);
    }

    #[test]
    fn test_latest_advertisement_wins() {
        let mut seen: MacSet<HostRecord> = MacSet::with_capacity(0).unwrap();
        let mac: MacAddress = "00:11:22:33:44:55".parse().unwrap();

        seen.add_host(Some(&make_host("00:11:22:33:44:55", "fe80::1"))).unwrap();
        seen.add_host(Some(&make_host("00:11:22:33:44:55", "2001:db8::7"))).unwrap();

        assert_eq!(seen.count(), 1);
        assert_eq!(
            seen.get(mac).unwrap().ip,
            "2001:db8::7".parse::<Ipv6Addr>().unwrap()
        );
    }

    #[test]
    fn test_retire_host() {
        let mut seen: MacSet<HostRecord> = MacSet::with_capacity(0).unwrap();
        let mac: MacAddress = "00:11:22:33:44:55".parse().unwrap();
        seen.add_host(Some(&make_host("00:11:22:33:44:55", "fe80::1"))).unwrap();

        seen.remove(mac).unwrap();
        assert!(!seen.contains(mac));

        // Retiring again is a normal, ignorable outcome.
        let err = seen.remove(mac).unwrap_err();
        assert!(matches!(err, StoreError::NotFound(m) if m == mac));
    }

    #[test]
    fn test_sweep_mixed_markers_and_records() {
        let mut seen: MacSet<HostRecord> = MacSet::with_capacity(8).unwrap();
        seen.add("00:00:00:00:00:01".parse().unwrap()).unwrap();
        seen.add_host(Some(&make_host("00:00:00:00:00:02", "fe80::2"))).unwrap();
        seen.add_host(Some(&make_host("00:00:00:00:00:03", "fe80::3"))).unwrap();

        let mut markers = 0;
        let mut records = 0;
        for (_, entry) in seen.iter() {
            match entry.record() {
                None => markers += 1,
                Some(_) => records += 1,
            }
        }
        assert_eq!((markers, records), (1, 2));
    }

    #[test]
    fn test_report_after_capture_round() {
        let mut seen: MacSet<HostRecord> = MacSet::with_capacity(0).unwrap();
        seen.add_text("00:11:22:33:44:55").unwrap();
        seen.add_host(Some(&make_host("66:77:88:99:aa:bb", "fe80::9"))).unwrap();

        let mut out = String::new();
        seen.write_report("monitored segment", &mut out).unwrap();

        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines.len(), 1 + seen.count());
        assert_eq!(lines[0], "MAC set 'monitored segment' with 2 entries:");
        assert!(lines.contains(&"00:11:22:33:44:55"));
        assert!(lines.contains(&"66:77:88:99:aa:bb"));
    }

    #[test]
    fn test_text_round_trip_through_store() {
        let mut seen: MacSet<HostRecord> = MacSet::with_capacity(0).unwrap();
        seen.add_text("00:11:22:33:44:55").unwrap();

        assert_eq!(seen.count(), 1);
        let stored = seen.macs().next().unwrap();
        assert_eq!(stored.to_string(), "00:11:22:33:44:55");
    }
}
