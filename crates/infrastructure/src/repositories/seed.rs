use zonekeeper_domain::{DnsRecord, Zone};

/// Fixed dataset the store starts from.
pub fn seed_zones() -> Vec<Zone> {
    vec![
        Zone::new(
            "example.com",
            vec![
                DnsRecord::new("www", "A", "192.168.1.100"),
                DnsRecord::new("api", "CNAME", "www.example.com"),
                DnsRecord::new("mail", "MX", "mail.example.com"),
                DnsRecord::new("txttest", "TXT", "v=spf1 include:_spf.google.com ~all"),
                DnsRecord::new("srvtest", "SRV", "0 5 5060 sip.example.com"),
            ],
        ),
        Zone::new(
            "sub.example.com",
            vec![
                DnsRecord::new("dev", "A", "192.168.1.101"),
                DnsRecord::new("test", "A", "192.168.1.102"),
            ],
        ),
        Zone::new(
            "anotherdomain.local",
            vec![
                DnsRecord::new("ftp", "CNAME", "dev.example.com"),
                DnsRecord::new("printer", "A", "192.168.1.103"),
                DnsRecord::new("vpn", "A", "192.168.1.104"),
            ],
        ),
    ]
}
