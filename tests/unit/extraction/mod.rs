mod extractor;
