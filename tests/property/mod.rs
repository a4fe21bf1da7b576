mod viewport_roundtrip;
