use criterion::{Criterion, criterion_group, criterion_main};
use odoo_rpc::codec::{XmlDecoder, XmlEncoder};
use odoo_rpc::rpc::{RpcRequest, RpcResponse};
use odoo_rpc::value::{RpcStruct, RpcValue};
use std::hint::black_box;

fn sample_records(count: i64) -> RpcValue {
    RpcValue::Array(
        (0..count)
            .map(|id| {
                let mut record = RpcStruct::new();
                record.insert("id".into(), RpcValue::Int(id));
                record.insert("name".into(), format!("Ticket #{id} & follow-up").into());
                record.insert("priority".into(), "2".into());
                record.insert(
                    "stage_id".into(),
                    RpcValue::from(vec![RpcValue::Int(1), "New".into()]),
                );
                RpcValue::Struct(record)
            })
            .collect(),
    )
}

fn bench_codec(c: &mut Criterion) {
    let records = sample_records(200);
    let request = RpcRequest::new("execute_kw", vec![records.clone()]);
    let response = XmlEncoder::encode_response(&RpcResponse::Success(records));

    c.bench_function("encode_request_200_records", |b| {
        b.iter(|| XmlEncoder::encode_request(black_box(&request)))
    });

    c.bench_function("decode_response_200_records", |b| {
        b.iter(|| XmlDecoder::decode_response(black_box(&response)))
    });
}

criterion_group!(benches, bench_codec);
criterion_main!(benches);
