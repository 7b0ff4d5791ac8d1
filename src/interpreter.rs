//! Tree-walking executor.
//!
//! Statements are executed for their effects and report control flow
//! through [`Flow`]; expressions evaluate to a [`Value`]. Bindings flow
//! through the closure, output through the context. Method invocation
//! builds a fresh closure holding only `self` and the formal parameters:
//! Mython methods do not see the caller's scope.

use std::cell::RefCell;
use std::rc::Rc;

use crate::ast::{
    BinaryOperator, Comparator, Expression, LogicalOperator, MethodBody, Program, Statement,
};
use crate::runtime::{
    Class, ClassInstance, Closure, Context, ExecResult, Method, RuntimeError, Value,
};

/// Control-flow marker for statement execution. `Return` carries the value
/// of a `return` statement upward until a method body converts it into the
/// method's result; it is distinct from the error channel on purpose, so a
/// runtime error can never be mistaken for a returning method.
#[derive(Debug)]
pub enum Flow {
    Continue,
    Return(Value),
}

/// Executes a whole program against the root closure.
pub fn execute_program(
    program: &Program,
    globals: &mut Closure,
    context: &mut Context<'_>,
) -> ExecResult<()> {
    for statement in &program.statements {
        match exec_statement(statement, globals, context)? {
            Flow::Continue => {}
            Flow::Return(_) => return Err(RuntimeError::ReturnOutsideMethod),
        }
    }
    Ok(())
}

pub fn exec_statement(
    statement: &Statement,
    closure: &mut Closure,
    context: &mut Context<'_>,
) -> ExecResult<Flow> {
    match statement {
        Statement::Assignment { name, value } => {
            let value = eval_expression(value, closure, context)?;
            closure.insert(name.clone(), value);
            Ok(Flow::Continue)
        }
        Statement::FieldAssignment {
            receiver,
            field,
            value,
        } => {
            let receiver = eval_expression(receiver, closure, context)?;
            let type_name = receiver.type_name();
            let Value::Instance(instance) = receiver else {
                return Err(RuntimeError::FieldAccessOnNonInstance {
                    field: field.clone(),
                    type_name,
                });
            };
            let value = eval_expression(value, closure, context)?;
            instance.borrow_mut().fields_mut().insert(field.clone(), value);
            Ok(Flow::Continue)
        }
        Statement::Print { args } => {
            let mut rendered = Vec::with_capacity(args.len());
            for arg in args {
                let value = eval_expression(arg, closure, context)?;
                rendered.push(stringify(&value, context)?);
            }
            writeln!(context.output(), "{}", rendered.join(" ")).map_err(|error| {
                RuntimeError::OutputWrite {
                    message: error.to_string(),
                }
            })?;
            Ok(Flow::Continue)
        }
        Statement::Expr(expression) => {
            eval_expression(expression, closure, context)?;
            Ok(Flow::Continue)
        }
        Statement::Compound(statements) => {
            for statement in statements {
                if let Flow::Return(value) = exec_statement(statement, closure, context)? {
                    return Ok(Flow::Return(value));
                }
            }
            Ok(Flow::Continue)
        }
        Statement::Return(expression) => {
            let value = eval_expression(expression, closure, context)?;
            Ok(Flow::Return(value))
        }
        Statement::IfElse {
            condition,
            then_body,
            else_body,
        } => {
            let condition = eval_expression(condition, closure, context)?;
            let flag = match condition {
                Value::Bool(flag) => flag,
                other => {
                    return Err(RuntimeError::ConditionMustBeBool {
                        got: other.type_name(),
                    });
                }
            };
            if flag {
                exec_statement(then_body, closure, context)
            } else if let Some(else_body) = else_body {
                exec_statement(else_body, closure, context)
            } else {
                Ok(Flow::Continue)
            }
        }
        Statement::ClassDefinition(class) => {
            closure.insert(class.name().to_string(), Value::Class(Rc::clone(class)));
            Ok(Flow::Continue)
        }
    }
}

pub fn eval_expression(
    expression: &Expression,
    closure: &mut Closure,
    context: &mut Context<'_>,
) -> ExecResult<Value> {
    match expression {
        Expression::Number(value) => Ok(Value::Number(*value)),
        Expression::String(value) => Ok(Value::String(value.clone())),
        Expression::Bool(value) => Ok(Value::Bool(*value)),
        Expression::None => Ok(Value::None),
        Expression::Variable { name, fields } => {
            let mut value = closure
                .get(name)
                .cloned()
                .ok_or_else(|| RuntimeError::UndefinedName { name: name.clone() })?;
            for field in fields {
                value = read_field(&value, field)?;
            }
            Ok(value)
        }
        Expression::BinaryOp { op, left, right } => {
            let lhs = eval_expression(left, closure, context)?;
            let rhs = eval_expression(right, closure, context)?;
            eval_binary_op(op, lhs, rhs, context)
        }
        Expression::Comparison { op, left, right } => {
            let lhs = eval_expression(left, closure, context)?;
            let rhs = eval_expression(right, closure, context)?;
            let result = match op {
                Comparator::Equal => equal(&lhs, &rhs, context)?,
                Comparator::NotEqual => !equal(&lhs, &rhs, context)?,
                Comparator::Less => less(&lhs, &rhs, context)?,
                Comparator::Greater => greater(&lhs, &rhs, context)?,
                Comparator::LessOrEqual => !greater(&lhs, &rhs, context)?,
                Comparator::GreaterOrEqual => !less(&lhs, &rhs, context)?,
            };
            Ok(Value::Bool(result))
        }
        Expression::LogicalOp { op, left, right } => {
            let operation = match op {
                LogicalOperator::And => "and",
                LogicalOperator::Or => "or",
            };
            let lhs = eval_expression(left, closure, context)?;
            let flag = match &lhs {
                Value::Bool(flag) => *flag,
                other => {
                    return Err(RuntimeError::OperandMustBeBool {
                        operation,
                        got: other.type_name(),
                    });
                }
            };
            let short_circuits = match op {
                LogicalOperator::And => !flag,
                LogicalOperator::Or => flag,
            };
            if short_circuits {
                return Ok(lhs);
            }
            let rhs = eval_expression(right, closure, context)?;
            if !matches!(rhs, Value::Bool(_)) {
                return Err(RuntimeError::OperandMustBeBool {
                    operation,
                    got: rhs.type_name(),
                });
            }
            Ok(rhs)
        }
        Expression::Not(operand) => {
            let value = eval_expression(operand, closure, context)?;
            match value {
                Value::Bool(flag) => Ok(Value::Bool(!flag)),
                other => Err(RuntimeError::OperandMustBeBool {
                    operation: "not",
                    got: other.type_name(),
                }),
            }
        }
        Expression::Stringify(operand) => {
            let value = eval_expression(operand, closure, context)?;
            Ok(Value::String(stringify(&value, context)?))
        }
        Expression::MethodCall {
            receiver,
            method,
            args,
        } => {
            let receiver = eval_expression(receiver, closure, context)?;
            let type_name = receiver.type_name();
            let Value::Instance(instance) = receiver else {
                return Err(RuntimeError::MethodCallOnNonInstance {
                    method: method.clone(),
                    type_name,
                });
            };
            // Resolve before evaluating arguments: a bad method name fails
            // without running the argument expressions.
            {
                let class = Rc::clone(instance.borrow().class());
                lookup_method(&class, method, args.len())?;
            }
            let mut actuals = Vec::with_capacity(args.len());
            for arg in args {
                actuals.push(eval_expression(arg, closure, context)?);
            }
            call_method(&instance, method, actuals, context)
        }
        Expression::NewInstance { class, args } => {
            let instance = Rc::new(RefCell::new(ClassInstance::new(Rc::clone(class))));
            // `__init__` runs only when it exists with matching arity;
            // otherwise construction succeeds with the arguments untouched.
            let has_matching_init =
                matches!(class.method("__init__"), Some(init) if init.arity() == args.len());
            if has_matching_init {
                let mut actuals = Vec::with_capacity(args.len());
                for arg in args {
                    actuals.push(eval_expression(arg, closure, context)?);
                }
                call_method(&instance, "__init__", actuals, context)?;
            }
            Ok(Value::Instance(instance))
        }
    }
}

/// Invokes a method on an instance: fresh closure, `self` shared in,
/// formals bound in order, body run as a method body.
pub fn call_method(
    instance: &Rc<RefCell<ClassInstance>>,
    method_name: &str,
    args: Vec<Value>,
    context: &mut Context<'_>,
) -> ExecResult<Value> {
    let class = Rc::clone(instance.borrow().class());
    let method = lookup_method(&class, method_name, args.len())?;

    let mut closure = Closure::new();
    closure.insert("self".to_string(), Value::Instance(Rc::clone(instance)));
    for (param, value) in method.formal_params().iter().zip(args) {
        closure.insert(param.clone(), value);
    }
    exec_method_body(method.body(), &mut closure, context)
}

/// Runs a method body, trapping the return flow: `return v` becomes the
/// result, falling off the end yields none. Errors keep propagating.
fn exec_method_body(
    body: &MethodBody,
    closure: &mut Closure,
    context: &mut Context<'_>,
) -> ExecResult<Value> {
    match exec_statement(body.statement(), closure, context)? {
        Flow::Continue => Ok(Value::None),
        Flow::Return(value) => Ok(value),
    }
}

/// Renders a value for `print`/`str`: instances go through `__str__` when
/// it exists with arity 0, everything else uses the default form.
pub fn stringify(value: &Value, context: &mut Context<'_>) -> ExecResult<String> {
    if let Value::Instance(instance) = value {
        if instance.borrow().has_method("__str__", 0) {
            let rendered = call_method(instance, "__str__", Vec::new(), context)?;
            return stringify(&rendered, context);
        }
    }
    Ok(value.to_output())
}

fn lookup_method<'c>(class: &'c Rc<Class>, method: &str, arity: usize) -> ExecResult<&'c Method> {
    let resolved = class
        .method(method)
        .ok_or_else(|| RuntimeError::UnknownMethod {
            method: method.to_string(),
            class: class.name().to_string(),
        })?;
    if resolved.arity() != arity {
        return Err(RuntimeError::MethodArityMismatch {
            method: method.to_string(),
            expected: resolved.arity(),
            found: arity,
        });
    }
    Ok(resolved)
}

fn read_field(value: &Value, field: &str) -> ExecResult<Value> {
    let Value::Instance(instance) = value else {
        return Err(RuntimeError::FieldAccessOnNonInstance {
            field: field.to_string(),
            type_name: value.type_name(),
        });
    };
    instance
        .borrow()
        .fields()
        .get(field)
        .cloned()
        .ok_or_else(|| RuntimeError::UndefinedField {
            field: field.to_string(),
        })
}

fn eval_binary_op(
    op: &BinaryOperator,
    lhs: Value,
    rhs: Value,
    context: &mut Context<'_>,
) -> ExecResult<Value> {
    let lhs_type = lhs.type_name();
    let rhs_type = rhs.type_name();
    match op {
        BinaryOperator::Add => match (lhs, rhs) {
            (Value::Number(l), Value::Number(r)) => Ok(Value::Number(l + r)),
            (Value::String(l), Value::String(r)) => Ok(Value::String(l + &r)),
            (Value::Instance(instance), rhs)
                if instance.borrow().has_method("__add__", 1) =>
            {
                call_method(&instance, "__add__", vec![rhs], context)
            }
            _ => Err(RuntimeError::UnsupportedOperands {
                operation: "+",
                lhs: lhs_type,
                rhs: rhs_type,
            }),
        },
        BinaryOperator::Sub => match (lhs, rhs) {
            (Value::Number(l), Value::Number(r)) => Ok(Value::Number(l - r)),
            _ => Err(RuntimeError::UnsupportedOperands {
                operation: "-",
                lhs: lhs_type,
                rhs: rhs_type,
            }),
        },
        BinaryOperator::Mult => match (lhs, rhs) {
            (Value::Number(l), Value::Number(r)) => Ok(Value::Number(l * r)),
            _ => Err(RuntimeError::UnsupportedOperands {
                operation: "*",
                lhs: lhs_type,
                rhs: rhs_type,
            }),
        },
        BinaryOperator::Div => match (lhs, rhs) {
            (Value::Number(_), Value::Number(0)) => Err(RuntimeError::DivisionByZero),
            (Value::Number(l), Value::Number(r)) => Ok(Value::Number(l / r)),
            _ => Err(RuntimeError::UnsupportedOperands {
                operation: "/",
                lhs: lhs_type,
                rhs: rhs_type,
            }),
        },
    }
}

fn equal(lhs: &Value, rhs: &Value, context: &mut Context<'_>) -> ExecResult<bool> {
    match (lhs, rhs) {
        (Value::None, Value::None) => Ok(true),
        (Value::Bool(l), Value::Bool(r)) => Ok(l == r),
        (Value::Number(l), Value::Number(r)) => Ok(l == r),
        (Value::String(l), Value::String(r)) => Ok(l == r),
        (Value::Instance(instance), _) if instance.borrow().has_method("__eq__", 1) => {
            let result = call_method(instance, "__eq__", vec![rhs.clone()], context)?;
            expect_bool_result("__eq__", result)
        }
        _ => Err(RuntimeError::UnsupportedOperands {
            operation: "==",
            lhs: lhs.type_name(),
            rhs: rhs.type_name(),
        }),
    }
}

fn less(lhs: &Value, rhs: &Value, context: &mut Context<'_>) -> ExecResult<bool> {
    match (lhs, rhs) {
        (Value::Bool(l), Value::Bool(r)) => Ok(l < r),
        (Value::Number(l), Value::Number(r)) => Ok(l < r),
        (Value::String(l), Value::String(r)) => Ok(l < r),
        (Value::Instance(instance), _) if instance.borrow().has_method("__lt__", 1) => {
            let result = call_method(instance, "__lt__", vec![rhs.clone()], context)?;
            expect_bool_result("__lt__", result)
        }
        _ => Err(RuntimeError::UnsupportedOperands {
            operation: "<",
            lhs: lhs.type_name(),
            rhs: rhs.type_name(),
        }),
    }
}

fn greater(lhs: &Value, rhs: &Value, context: &mut Context<'_>) -> ExecResult<bool> {
    Ok(!less(lhs, rhs, context)? && !equal(lhs, rhs, context)?)
}

fn expect_bool_result(method: &'static str, value: Value) -> ExecResult<bool> {
    match value {
        Value::Bool(flag) => Ok(flag),
        other => Err(RuntimeError::MethodMustReturnBool {
            method,
            got: other.type_name(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser;
    use indoc::indoc;

    fn run(source: &str) -> ExecResult<String> {
        let program = parser::parse(source).expect("parse failed");
        let mut output = Vec::new();
        let mut context = Context::new(&mut output);
        let mut globals = Closure::new();
        execute_program(&program, &mut globals, &mut context)?;
        Ok(String::from_utf8(output).expect("output should be utf-8"))
    }

    fn run_ok(source: &str) -> String {
        run(source).expect("program should run")
    }

    fn run_err(source: &str) -> RuntimeError {
        run(source).expect_err("program should fail")
    }

    #[test]
    fn assignment_binds_and_rebinds() {
        assert_eq!(run_ok("x = 1 + 2\nprint x\nx = x * 2\nprint x\n"), "3\n6\n");
    }

    #[test]
    fn string_concatenation() {
        assert_eq!(run_ok("x = 'a'\ny = \"b\"\nprint x + y\n"), "ab\n");
    }

    #[test]
    fn integer_division_truncates() {
        assert_eq!(run_ok("print 7 / 2, 0 - 7 / 2\n"), "3 -3\n");
    }

    #[test]
    fn division_by_zero_fails() {
        assert_eq!(run_err("print 7 / 0\n"), RuntimeError::DivisionByZero);
    }

    #[test]
    fn mixed_operand_arithmetic_fails() {
        assert_eq!(
            run_err("x = 1 + 'a'\n"),
            RuntimeError::UnsupportedOperands {
                operation: "+",
                lhs: "int",
                rhs: "str",
            }
        );
        assert_eq!(
            run_err("x = 'a' * 'b'\n"),
            RuntimeError::UnsupportedOperands {
                operation: "*",
                lhs: "str",
                rhs: "str",
            }
        );
    }

    #[test]
    fn comparison_operators_on_scalars() {
        assert_eq!(
            run_ok("print 1 < 2, 2 <= 2, 3 > 2, 2 >= 3, 1 == 1, 1 != 1\n"),
            "True True True False True False\n"
        );
        assert_eq!(run_ok("print False < True\n"), "True\n");
        assert_eq!(run_ok("print 'abc' < 'abd', 'b' < 'abc'\n"), "True False\n");
    }

    #[test]
    fn none_compares_equal_only_to_none() {
        assert_eq!(run_ok("print None == None, None != None\n"), "True False\n");
        assert_eq!(
            run_err("x = None == 1\n"),
            RuntimeError::UnsupportedOperands {
                operation: "==",
                lhs: "NoneType",
                rhs: "int",
            }
        );
        assert_eq!(
            run_err("x = None < None\n"),
            RuntimeError::UnsupportedOperands {
                operation: "<",
                lhs: "NoneType",
                rhs: "NoneType",
            }
        );
    }

    #[test]
    fn logical_operators_return_last_evaluated_operand() {
        assert_eq!(
            run_ok("print True and False, False and True, True or False, False or True\n"),
            "False False True True\n"
        );
    }

    #[test]
    fn logical_operators_require_bools() {
        assert_eq!(
            run_err("x = 1 and True\n"),
            RuntimeError::OperandMustBeBool {
                operation: "and",
                got: "int",
            }
        );
        assert_eq!(
            run_err("x = False or 'yes'\n"),
            RuntimeError::OperandMustBeBool {
                operation: "or",
                got: "str",
            }
        );
        assert_eq!(
            run_err("x = not 0\n"),
            RuntimeError::OperandMustBeBool {
                operation: "not",
                got: "int",
            }
        );
    }

    #[test]
    fn and_short_circuits_without_evaluating_the_right_operand() {
        let source = indoc! {"
            class C:
              def m(self):
                self.f = 1
                return True

            c = C()
            c.f = 0
            x = False and c.m()
            print c.f, x
        "};
        assert_eq!(run_ok(source), "0 False\n");
    }

    #[test]
    fn or_short_circuits_without_evaluating_the_right_operand() {
        let source = indoc! {"
            class C:
              def m(self):
                self.f = 1
                return False

            c = C()
            c.f = 0
            x = True or c.m()
            print c.f, x
        "};
        assert_eq!(run_ok(source), "0 True\n");
    }

    #[test]
    fn if_condition_must_be_bool() {
        assert_eq!(
            run_err("if 1:\n  print 1\n"),
            RuntimeError::ConditionMustBeBool { got: "int" }
        );
    }

    #[test]
    fn if_else_branches() {
        let source = indoc! {"
            x = 1
            if x == 1:
              if x < 2:
                print 'ok'
            if x == 2:
              print 'then'
            else:
              print 'else'
        "};
        assert_eq!(run_ok(source), "ok\nelse\n");
    }

    #[test]
    fn undefined_names_and_fields_fail() {
        assert_eq!(
            run_err("print missing\n"),
            RuntimeError::UndefinedName {
                name: "missing".to_string()
            }
        );
        let source = indoc! {"
            class C:
              def m(self):
                return 1

            c = C()
            print c.missing
        "};
        assert_eq!(
            run_err(source),
            RuntimeError::UndefinedField {
                field: "missing".to_string()
            }
        );
    }

    #[test]
    fn field_access_on_scalar_fails() {
        assert_eq!(
            run_err("x = 1\nprint x.f\n"),
            RuntimeError::FieldAccessOnNonInstance {
                field: "f".to_string(),
                type_name: "int",
            }
        );
    }

    #[test]
    fn method_call_on_scalar_fails() {
        assert_eq!(
            run_err("x = 1\nx.m()\n"),
            RuntimeError::MethodCallOnNonInstance {
                method: "m".to_string(),
                type_name: "int",
            }
        );
    }

    #[test]
    fn unknown_method_and_arity_mismatch() {
        let source = indoc! {"
            class C:
              def m(self, a):
                return a

            c = C()
            c.n()
        "};
        assert_eq!(
            run_err(source),
            RuntimeError::UnknownMethod {
                method: "n".to_string(),
                class: "C".to_string(),
            }
        );

        let source = indoc! {"
            class C:
              def m(self, a):
                return a

            c = C()
            c.m(1, 2)
        "};
        assert_eq!(
            run_err(source),
            RuntimeError::MethodArityMismatch {
                method: "m".to_string(),
                expected: 1,
                found: 2,
            }
        );
    }

    #[test]
    fn init_runs_when_arity_matches() {
        let source = indoc! {"
            class Point:
              def __init__(self, x, y):
                self.x = x
                self.y = y

            p = Point(3, 4)
            print p.x + p.y
        "};
        assert_eq!(run_ok(source), "7\n");
    }

    #[test]
    fn construction_without_matching_init_skips_it() {
        let source = indoc! {"
            class C:
              def __init__(self, x):
                self.x = x

            c = C()
            print c
        "};
        // No matching __init__: the instance is created with no fields and
        // the default identity rendering is used.
        let output = run_ok(source);
        assert!(output.starts_with("<C object at 0x"), "got {output}");
    }

    #[test]
    fn methods_dispatch_through_inheritance() {
        let source = indoc! {"
            class Animal:
              def sound(self):
                return 'silence'

              def describe(self):
                return self.sound()

            class Dog(Animal):
              def sound(self):
                return 'woof'

            class Puppy(Dog):
              def nap(self):
                return True

            a = Animal()
            d = Dog()
            p = Puppy()
            print a.describe(), d.describe(), p.describe()
        "};
        assert_eq!(run_ok(source), "silence woof woof\n");
    }

    #[test]
    fn return_stops_the_method_body() {
        let source = indoc! {"
            class C:
              def m(self):
                self.trace = 1
                return 7
                self.trace = 2

            c = C()
            print c.m()
            print c.trace
        "};
        assert_eq!(run_ok(source), "7\n1\n");
    }

    #[test]
    fn falling_off_a_method_yields_none() {
        let source = indoc! {"
            class C:
              def m(self):
                x = 1

            c = C()
            print c.m()
        "};
        assert_eq!(run_ok(source), "None\n");
    }

    #[test]
    fn return_at_top_level_fails() {
        assert_eq!(run_err("return 1\n"), RuntimeError::ReturnOutsideMethod);
    }

    #[test]
    fn self_aliases_the_receiver() {
        let source = indoc! {"
            class Counter:
              def __init__(self):
                self.count = 0

              def bump(self):
                self.count = self.count + 1

            c = Counter()
            c.bump()
            c.bump()
            print c.count
        "};
        assert_eq!(run_ok(source), "2\n");
    }

    #[test]
    fn instances_are_shared_between_bindings() {
        let source = indoc! {"
            class Box:
              def __init__(self):
                self.value = 0

            a = Box()
            b = a
            b.value = 5
            print a.value
        "};
        assert_eq!(run_ok(source), "5\n");
    }

    #[test]
    fn method_closures_do_not_see_globals() {
        let source = indoc! {"
            class C:
              def m(self):
                return g

            g = 1
            c = C()
            print c.m()
        "};
        assert_eq!(
            run_err(source),
            RuntimeError::UndefinedName {
                name: "g".to_string()
            }
        );
    }

    #[test]
    fn str_hook_drives_printing() {
        let source = indoc! {"
            class Named:
              def __init__(self, name):
                self.name = name

              def __str__(self):
                return self.name

            n = Named('hi')
            print n
            print str(n) + '!'
        "};
        assert_eq!(run_ok(source), "hi\nhi!\n");
    }

    #[test]
    fn str_hook_returning_none_prints_none() {
        let source = indoc! {"
            class Quiet:
              def __str__(self):
                return

            q = Quiet()
            print q
        "};
        assert_eq!(run_ok(source), "None\n");
    }

    #[test]
    fn stringify_of_none_and_scalars() {
        assert_eq!(
            run_ok("print str(None), str(5), str(True), str('x')\n"),
            "None 5 True x\n"
        );
    }

    #[test]
    fn add_hook_on_instances() {
        let source = indoc! {"
            class Money:
              def __init__(self, amount):
                self.amount = amount

              def __add__(self, other):
                return Money(self.amount + other.amount)

              def __str__(self):
                return str(self.amount)

            total = Money(3) + Money(4)
            print total
        "};
        assert_eq!(run_ok(source), "7\n");
    }

    #[test]
    fn add_without_hook_fails() {
        let source = indoc! {"
            class C:
              def m(self):
                return 1

            x = C() + 1
        "};
        assert_eq!(
            run_err(source),
            RuntimeError::UnsupportedOperands {
                operation: "+",
                lhs: "instance",
                rhs: "int",
            }
        );
    }

    #[test]
    fn eq_and_lt_hooks_drive_all_comparisons() {
        let source = indoc! {"
            class Level:
              def __init__(self, rank):
                self.rank = rank

              def __eq__(self, other):
                return self.rank == other.rank

              def __lt__(self, other):
                return self.rank < other.rank

            a = Level(1)
            b = Level(2)
            print a == b, a != b, a < b, a <= b, a > b, a >= b
        "};
        assert_eq!(run_ok(source), "False True True True False False\n");
    }

    #[test]
    fn comparison_hook_must_return_bool() {
        let source = indoc! {"
            class C:
              def __eq__(self, other):
                return 1

            x = C() == C()
        "};
        assert_eq!(
            run_err(source),
            RuntimeError::MethodMustReturnBool {
                method: "__eq__",
                got: "int",
            }
        );
    }

    #[test]
    fn instances_without_hooks_do_not_compare() {
        let source = indoc! {"
            class C:
              def m(self):
                return 1

            x = C() == C()
        "};
        assert_eq!(
            run_err(source),
            RuntimeError::UnsupportedOperands {
                operation: "==",
                lhs: "instance",
                rhs: "instance",
            }
        );
    }

    #[test]
    fn print_separates_with_spaces_and_ends_the_line() {
        assert_eq!(run_ok("print 1, 'two', True, None\n"), "1 two True None\n");
        assert_eq!(run_ok("print\n"), "\n");
    }

    #[test]
    fn print_renders_classes_by_name() {
        let source = indoc! {"
            class Widget:
              def m(self):
                return 1

            print Widget
        "};
        assert_eq!(run_ok(source), "Class Widget\n");
    }

    #[test]
    fn unary_minus_evaluates() {
        assert_eq!(run_ok("x = -5\nprint -x, -(1 + 2)\n"), "5 -3\n");
    }

    #[test]
    fn methods_can_call_methods_recursively() {
        let source = indoc! {"
            class Fib:
              def calc(self, n):
                if n < 2:
                  return n
                return self.calc(n - 1) + self.calc(n - 2)

            f = Fib()
            print f.calc(10)
        "};
        assert_eq!(run_ok(source), "55\n");
    }
}
