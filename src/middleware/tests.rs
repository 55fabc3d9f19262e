#[cfg(test)]
mod tests {
    use hyper::HeaderMap;
    use crate::middleware::apply_change_origin;

    #[test]
    fn test_apply_change_origin() {
        let mut headers = HeaderMap::new();
        headers.insert("host", "localhost:5173".parse().unwrap());

        apply_change_origin(&mut headers, "http://127.0.0.1:4000");

        assert_eq!(headers.get("host").unwrap(), "127.0.0.1:4000");
    }

    #[test]
    fn test_unparseable_target_leaves_host_alone() {
        let mut headers = HeaderMap::new();
        headers.insert("host", "localhost:5173".parse().unwrap());

        apply_change_origin(&mut headers, "not a url");

        assert_eq!(headers.get("host").unwrap(), "localhost:5173");
    }
}
