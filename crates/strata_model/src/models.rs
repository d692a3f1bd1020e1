//! Stock model definitions: SRAM, FIFO, and line buffer.
//!
//! These are golden reference descriptions of common memory elements, built
//! entirely through the public authoring API. Guard conditions document when
//! an action is meaningful in hardware; the evaluator still runs an action
//! whose guards do not hold.

use crate::model::Model;
use strata_ir::PortDirection;

/// A single-output SRAM with `size` cells.
///
/// `read` drives `data_out` from the cell at `addr` and returns it; `write`
/// stores `data_in` at `addr`. The `ren`/`wen` guards are advisory.
pub fn define_sram(size: usize) -> Model {
    let mut m = Model::new(size);
    let ren = m.define_port_in("ren", 1);
    let data_out = m.define_port_out("data_out", 16);
    let addr = m.define_port_in("addr", 16);
    let wen = m.define_port_in("wen", 1);
    let data_in = m.define_port_in("data_in", 16);

    m.define_action("read", move |b| {
        let guard = b.eq(ren, 1);
        b.expect(guard);
        let guard = b.eq(wen, 0);
        b.expect(guard);
        let cell = b.mem_cell(addr);
        b.assign(data_out, cell);
        b.operand(data_out)
    });

    m.define_action("write", move |b| {
        let guard = b.eq(ren, 0);
        b.expect(guard);
        let guard = b.eq(wen, 1);
        b.expect(guard);
        let cell = b.mem_cell(addr);
        b.assign(cell, data_in);
    });

    m
}

/// A FIFO of `size` words with almost-empty/almost-full status ports.
///
/// `almost_empty` starts high (an empty FIFO is almost empty) and tracks
/// `word_count < 3`; `almost_full` tracks `word_count > size - 3`. The read
/// address deliberately advances without wrapping, matching the reference
/// hardware this models.
pub fn define_fifo(size: usize) -> Model {
    let size = size as i64;
    let mut m = Model::new(size as usize);
    let ren = m.define_port_in("ren", 1);
    let data_out = m.define_port_out("data_out", 16);
    let wen = m.define_port_in("wen", 1);
    let data_in = m.define_port_in("data_in", 16);
    let almost_empty = m.define_port("almost_empty", 1, PortDirection::Out, 1);
    let almost_full = m.define_port_out("almost_full", 1);

    let read_addr = m.define_variable("read_addr", 16, 0);
    let write_addr = m.define_variable("write_addr", 16, 0);
    let word_count = m.define_variable("word_count", 16, 0);

    m.define_action("enqueue", move |b| {
        let guard = b.eq(wen, 1);
        b.expect(guard);
        let guard = b.lt(word_count, size);
        b.expect(guard);
        let cell = b.mem_cell(write_addr);
        b.assign(cell, data_in);
        let next = b.add(write_addr, 1);
        let next = b.modulo(next, size);
        b.assign(write_addr, next);
        let next = b.add(word_count, 1);
        let next = b.modulo(next, size);
        b.assign(word_count, next);

        let set = b.assign(almost_empty, 1);
        let pred = b.lt(word_count, 3);
        let handle = b.if_stmt(pred, set);
        let clear = b.assign(almost_empty, 0);
        b.attach_else(handle, clear);

        let set = b.assign(almost_full, 1);
        let pred = b.gt(word_count, size - 3);
        let handle = b.if_stmt(pred, set);
        let clear = b.assign(almost_full, 0);
        b.attach_else(handle, clear);
    });

    m.define_action("dequeue", move |b| {
        let guard = b.eq(ren, 1);
        b.expect(guard);
        let guard = b.gt(word_count, 0);
        b.expect(guard);
        let cell = b.mem_cell(read_addr);
        b.assign(data_out, cell);
        let next = b.add(read_addr, 1);
        b.assign(read_addr, next);
        let next = b.sub(word_count, 1);
        let next = b.modulo(next, size);
        b.assign(word_count, next);

        let set = b.assign(almost_empty, 1);
        let pred = b.lt(word_count, 3);
        let handle = b.if_stmt(pred, set);
        let clear = b.assign(almost_empty, 0);
        b.attach_else(handle, clear);

        let set = b.assign(almost_full, 1);
        let pred = b.gt(word_count, size - 3);
        let handle = b.if_stmt(pred, set);
        let clear = b.assign(almost_full, 0);
        b.attach_else(handle, clear);

        b.operand(data_out)
    });

    m.define_action("reset", move |b| {
        b.assign(read_addr, 0);
        b.assign(write_addr, 0);
        b.assign(word_count, 0);
        b.assign(almost_empty, 1);
        b.assign(almost_full, 0);
    });

    m
}

/// A line buffer of `rows` rows, each `depth` words deep.
///
/// `enqueue` shifts a word in; once `depth * rows` words have been written,
/// `valid` goes high and `dequeue` yields one word per row, spaced `depth`
/// apart in the backing memory.
pub fn define_line_buffer(depth: usize, rows: usize) -> Model {
    let buffer_size = (depth * rows) as i64;
    let depth = depth as i64;
    let mut m = Model::new(buffer_size as usize);

    let data_outs: Vec<_> = (0..rows)
        .map(|i| m.define_port_out(&format!("data_out_{i}"), 16))
        .collect();
    let wen = m.define_port_in("wen", 1);
    let data_in = m.define_port_in("data_in", 16);
    let valid = m.define_port_out("valid", 1);

    let read_addr = m.define_variable("read_addr", 16, 0);
    let write_addr = m.define_variable("write_addr", 16, 0);
    let word_count = m.define_variable("word_count", 16, 0);

    m.define_const("depth", depth);
    m.define_const("num_row", rows as i64);

    m.define_action("enqueue", move |b| {
        let guard = b.eq(wen, 1);
        b.expect(guard);
        let cell = b.mem_cell(write_addr);
        b.assign(cell, data_in);
        let next = b.add(write_addr, 1);
        let next = b.modulo(next, buffer_size);
        b.assign(write_addr, next);
        let next = b.add(word_count, 1);
        b.assign(word_count, next);

        let set = b.assign(valid, 1);
        let pred = b.ge(word_count, buffer_size);
        let handle = b.if_stmt(pred, set);
        let clear = b.assign(valid, 0);
        b.attach_else(handle, clear);
    });

    let outs = data_outs;
    m.define_action("dequeue", move |b| {
        let guard = b.eq(valid, 1);
        b.expect(guard);
        let guard = b.gt(word_count, 0);
        b.expect(guard);
        for (idx, out) in outs.iter().enumerate() {
            let offset = b.add(read_addr, depth * idx as i64);
            let index = b.modulo(offset, buffer_size);
            let cell = b.mem_cell(index);
            b.assign(*out, cell);
        }
        let next = b.add(read_addr, 1);
        let next = b.modulo(next, buffer_size);
        b.assign(read_addr, next);
        let next = b.sub(word_count, 1);
        b.assign(word_count, next);

        let set = b.assign(valid, 1);
        let pred = b.ge(word_count, buffer_size);
        let handle = b.if_stmt(pred, set);
        let clear = b.assign(valid, 0);
        b.attach_else(handle, clear);

        outs.iter().map(|out| b.operand(*out)).collect::<Vec<_>>()
    });

    m.define_action("reset", move |b| {
        b.assign(read_addr, 0);
        b.assign(write_addr, 0);
        b.assign(word_count, 0);
    });

    m
}
